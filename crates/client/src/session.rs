//! Session context: where the bearer token lives and how it is dropped.
//!
//! The form and account flows never touch storage directly; they get a
//! [`SessionContext`] and ask it for the token or to clear the session.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait SessionContext: Send + Sync {
    /// Current bearer token; `None` means the user is not logged in.
    fn token(&self) -> Option<String>;

    /// Drop the token and any other session-scoped state.
    fn clear_session(&self);
}

// ---------------------------------------------------------------------------
// FileSession
// ---------------------------------------------------------------------------

/// Token persisted in a file between CLI invocations.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `token`, creating the parent directory if needed.
    pub fn store_token(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token.trim())
    }
}

impl SessionContext for FileSession {
    fn token(&self) -> Option<String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    fn clear_session(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::info!(path = %self.path.display(), "Session cleared"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to remove token file",
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// MemorySession
// ---------------------------------------------------------------------------

/// In-process session, used by embedders and tests.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    pub fn logged_out() -> Self {
        Self::default()
    }
}

impl SessionContext for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn clear_session(&self) {
        if let Ok(mut token) = self.token.lock() {
            *token = None;
        }
    }
}
