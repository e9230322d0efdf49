//! Mock adapters for testing.

pub mod session_source;

pub use session_source::MockSessionSource;
