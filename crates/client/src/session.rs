//! Anonymous-session persistence for the CLI.
//!
//! The web product keeps the anonymous session token in browser local
//! storage; the CLI stands that in with one JSON file on disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use memora_core::identity::{is_session_expired, AnonymousSession};

/// Errors from reading or writing the session file.
#[derive(Debug, Error)]
pub enum SessionFileError {
    #[error("could not determine a home directory for the session file")]
    NoHomeDirectory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One anonymous session persisted as JSON at a well-known path.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Use the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the path from `MEMORA_SESSION_FILE`, falling back to
    /// `~/.memora/session.json`.
    pub fn from_env() -> Result<Self, SessionFileError> {
        if let Ok(path) = std::env::var("MEMORA_SESSION_FILE") {
            return Ok(Self::new(path));
        }
        let home = dirs::home_dir().ok_or(SessionFileError::NoHomeDirectory)?;
        Ok(Self::new(home.join(".memora").join("session.json")))
    }

    /// The file path in use.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session, if one exists. A file that cannot be parsed
    /// counts as no session; the next [`load_or_start`](Self::load_or_start)
    /// replaces it.
    pub fn load(&self) -> Result<Option<AnonymousSession>, SessionFileError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(session) => Ok(Some(session)),
            Err(error) => {
                tracing::warn!(
                    %error,
                    path = %self.path.display(),
                    "ignoring unreadable session file"
                );
                Ok(None)
            }
        }
    }

    /// Load the stored session, starting (and persisting) a fresh one if
    /// none exists or the stored one has expired.
    pub fn load_or_start(&self) -> Result<AnonymousSession, SessionFileError> {
        let now = Utc::now();
        if let Some(session) = self.load()? {
            if !is_session_expired(&session, now) {
                return Ok(session);
            }
            tracing::debug!("stored session expired; starting a new one");
        }

        let session = AnonymousSession::start(now);
        self.save(&session)?;
        Ok(session)
    }

    /// Persist a session, creating parent directories as needed.
    pub fn save(&self, session: &AnonymousSession) -> Result<(), SessionFileError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Remove the session file. Removing an absent file succeeds.
    pub fn clear(&self) -> Result<(), SessionFileError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
