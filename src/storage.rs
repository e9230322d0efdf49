//! Persistence of the last manually-loaded session id.
//!
//! One id in one file under the platform data directory. Read at startup to
//! pre-fill the id field; written after each successful user-triggered load.
//! Shared-link loads never write it.

use color_eyre::{eyre::WrapErr, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name holding the persisted id, under the application data directory.
const SESSION_ID_FILE: &str = "session_id";

/// Store for the last-used session id.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default platform location
    /// (`<data-dir>/traceview/session_id`).
    ///
    /// Returns `None` when no data directory can be determined; the app then
    /// runs without persistence.
    pub fn new() -> Option<Self> {
        dirs::data_dir().map(|dir| Self {
            path: dir.join("traceview").join(SESSION_ID_FILE),
        })
    }

    /// Store backed by an explicit file path (tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted session id, if any.
    pub fn load(&self) -> Option<String> {
        let id = fs::read_to_string(&self.path).ok()?;
        let id = id.trim();
        if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        }
    }

    /// Persist a session id, creating parent directories as needed.
    pub fn save(&self, session_id: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {:?}", parent))?;
        }
        fs::write(&self.path, session_id)
            .wrap_err_with(|| format!("Failed to write session id to {:?}", self.path))?;
        Ok(())
    }
}
