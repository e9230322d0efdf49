//! WebSocket client for loading a session from the telemetry server.
//!
//! The server contract is one request, one reply: the client connects to
//! `/ws?session_id=<id>`, the server sends a single text frame containing the
//! session payload, and the client closes the connection. There is no retry,
//! no timeout and no reconnection; a server that never replies leaves the
//! caller suspended.

use futures_util::StreamExt;
use thiserror::Error;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

use crate::models::SessionData;

/// Errors from a one-shot session fetch.
#[derive(Debug, Clone, Error)]
pub enum WsError {
    /// The connection could not be established
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// The connection ended before a session payload arrived
    #[error("Connection closed before a session payload arrived")]
    ClosedEarly,
    /// The payload was not a valid session object
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Configuration for the session client.
#[derive(Debug, Clone)]
pub struct WsClientConfig {
    /// Server address, host[:port]
    pub host: String,
    /// Use `wss://` instead of `ws://`
    pub use_tls: bool,
}

impl Default for WsClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1:8080".to_string(),
            use_tls: false,
        }
    }
}

impl WsClientConfig {
    /// Set the server address.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Enable or disable TLS.
    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    /// Build the request URL for a session id.
    ///
    /// The id is percent-encoded; an empty id is still sent and left for the
    /// server to reject.
    pub fn session_url(&self, session_id: &str) -> String {
        let scheme = if self.use_tls { "wss" } else { "ws" };
        format!(
            "{}://{}/ws?session_id={}",
            scheme,
            self.host,
            urlencoding::encode(session_id)
        )
    }
}

/// Fetch a session payload.
///
/// Connects, waits for the first text frame, parses it as [`SessionData`],
/// closes the connection and returns the payload. Non-text frames before the
/// payload are skipped.
pub async fn fetch_session(
    config: &WsClientConfig,
    session_id: &str,
) -> Result<SessionData, WsError> {
    let url = config.session_url(session_id);

    let (mut ws, _) = connect_async(&url)
        .await
        .map_err(|e| WsError::ConnectionFailed(e.to_string()))?;
    debug!(%url, "Connected to session endpoint");

    while let Some(msg) = ws.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let session: SessionData =
                    serde_json::from_str(&text).map_err(|e| WsError::Parse(e.to_string()))?;
                let _ = ws.close(None).await;
                info!(
                    session_id,
                    values = session.values.len(),
                    groups = session.groups.len(),
                    "Session payload received"
                );
                return Ok(session);
            }
            Ok(Message::Close(frame)) => {
                warn!(session_id, ?frame, "Server closed before sending a payload");
                break;
            }
            Ok(_) => {
                // Ping/pong/binary frames are transport noise, not payloads
            }
            Err(e) => return Err(WsError::ConnectionFailed(e.to_string())),
        }
    }

    Err(WsError::ClosedEarly)
}
