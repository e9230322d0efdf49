//! Data models for session payloads.

pub mod session;

pub use session::{Group, SessionData, ValueSeries};
