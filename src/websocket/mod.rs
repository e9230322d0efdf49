//! One-shot WebSocket session fetching.

pub mod client;

pub use client::{fetch_session, WsClientConfig, WsError};
