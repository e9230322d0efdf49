//! AppMessage enum for async communication within the application.

use crate::models::SessionData;

/// Messages received from spawned session loads.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A session payload arrived
    SessionLoaded {
        /// The id the load was started with
        session_id: String,
        /// The parsed payload
        session: SessionData,
        /// Persist the id to the session store on success
        persist: bool,
    },
    /// A load failed; the current view is kept
    SessionLoadFailed { session_id: String, error: String },
}
