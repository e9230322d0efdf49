//! Tungstenite-based session source adapter.
//!
//! Wraps [`fetch_session`] behind the [`SessionSource`] trait so the app can
//! also be driven by mocks.

use async_trait::async_trait;

use crate::models::SessionData;
use crate::traits::SessionSource;
use crate::websocket::{fetch_session, WsClientConfig, WsError};

/// Session source backed by a live WebSocket server.
#[derive(Debug, Clone)]
pub struct TungsteniteSessionSource {
    config: WsClientConfig,
}

impl TungsteniteSessionSource {
    /// Create an adapter for the given server configuration.
    pub fn new(config: WsClientConfig) -> Self {
        Self { config }
    }

    /// The server configuration this adapter connects with.
    pub fn config(&self) -> &WsClientConfig {
        &self.config
    }
}

#[async_trait]
impl SessionSource for TungsteniteSessionSource {
    async fn fetch(&self, session_id: &str) -> Result<SessionData, WsError> {
        fetch_session(&self.config, session_id).await
    }
}
