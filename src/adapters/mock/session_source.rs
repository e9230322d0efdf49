//! Mock session source for testing.
//!
//! Returns scripted payloads in order and records every requested session id
//! so tests can assert what the controller asked for.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::SessionData;
use crate::traits::SessionSource;
use crate::websocket::WsError;

/// Scriptable [`SessionSource`] for tests.
///
/// # Example
///
/// ```ignore
/// let source = MockSessionSource::new();
/// source.push_session(sample_session());
/// source.push_error(WsError::ClosedEarly);
///
/// assert!(source.fetch("abc").await.is_ok());
/// assert!(source.fetch("abc").await.is_err());
/// assert_eq!(source.requested_ids(), vec!["abc", "abc"]);
/// ```
#[derive(Debug, Default)]
pub struct MockSessionSource {
    /// Scripted responses, consumed front to back
    responses: Mutex<VecDeque<Result<SessionData, WsError>>>,
    /// Every session id passed to `fetch`, in call order
    requests: Mutex<Vec<String>>,
}

impl MockSessionSource {
    /// Create a mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful payload.
    pub fn push_session(&self, session: SessionData) {
        self.responses.lock().unwrap().push_back(Ok(session));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: WsError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// All session ids requested so far, in call order.
    pub fn requested_ids(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of fetches performed.
    pub fn fetch_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionSource for MockSessionSource {
    async fn fetch(&self, session_id: &str) -> Result<SessionData, WsError> {
        self.requests.lock().unwrap().push(session_id.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            // An unscripted fetch behaves like a server that hung up
            .unwrap_or(Err(WsError::ClosedEarly))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_scripted_responses_in_order() {
        let source = MockSessionSource::new();
        source.push_session(SessionData::default());
        source.push_error(WsError::ClosedEarly);

        assert!(source.fetch("first").await.is_ok());
        assert!(matches!(
            source.fetch("second").await,
            Err(WsError::ClosedEarly)
        ));
    }

    #[tokio::test]
    async fn test_mock_records_requested_ids() {
        let source = MockSessionSource::new();
        source.push_session(SessionData::default());
        source.push_session(SessionData::default());

        let _ = source.fetch("abc").await;
        let _ = source.fetch("xyz").await;

        assert_eq!(source.requested_ids(), vec!["abc", "xyz"]);
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_unscripted_fetch_fails() {
        let source = MockSessionSource::new();
        assert!(matches!(
            source.fetch("abc").await,
            Err(WsError::ClosedEarly)
        ));
    }
}
