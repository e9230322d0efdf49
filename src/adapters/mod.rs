//! Adapter implementations of the trait abstractions.

pub mod mock;
pub mod tungstenite_ws;

pub use tungstenite_ws::TungsteniteSessionSource;
