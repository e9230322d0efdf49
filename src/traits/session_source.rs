//! Session source trait abstraction.
//!
//! Abstracts the one-shot session fetch so the page controller can be wired
//! to a live WebSocket adapter or a mock in tests.

use async_trait::async_trait;

use crate::models::SessionData;
use crate::websocket::WsError;

/// A source of session payloads.
///
/// One call, one payload: implementations resolve a session id to a complete
/// [`SessionData`] or an error. There is no streaming and no cancellation;
/// concurrent fetches are independent.
///
/// # Example
///
/// ```ignore
/// use traceview::traits::SessionSource;
///
/// async fn load<S: SessionSource>(source: &S) {
///     match source.fetch("abc").await {
///         Ok(session) => { /* render */ }
///         Err(e) => tracing::warn!("load failed: {e}"),
///     }
/// }
/// ```
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Fetch the session with the given id.
    async fn fetch(&self, session_id: &str) -> Result<SessionData, WsError>;
}
