//! Durable session record storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use solicred_auth::Principal;

/// The record a backend keeps between process runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub principal: Principal,
    pub stored_at: DateTime<Utc>,
}

/// Session storage failure.
///
/// `Corrupt` is never surfaced to navigation code: the store treats it as
/// "no session" and recovers by removing the record.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored session record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Where the session record lives between page loads and restarts.
pub trait SessionBackend: Send + Sync {
    /// Load the stored record, if any.
    ///
    /// A missing record is `Ok(None)`; a record that cannot be decoded is
    /// `Err(Corrupt)`. Implementations never panic.
    fn load(&self) -> Result<Option<StoredSession>, SessionError>;

    fn save(&self, record: &StoredSession) -> Result<(), SessionError>;

    /// Remove the record. No-op when nothing is stored.
    fn clear(&self) -> Result<(), SessionError>;
}

/// JSON-file-backed record, one per install.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the portal's record location:
    /// `{app_data_dir}/solicred/session.json`.
    pub fn portal_default() -> anyhow::Result<Self> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .context("failed to resolve OS app data directory")?;

        let mut dir = base;
        dir.push("solicred");
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create session directory at {dir:?}"))?;

        dir.push("session.json");
        Ok(Self::new(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionBackend for FileBackend {
    fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let record = serde_json::from_str(&raw)?;
        Ok(Some(record))
    }

    fn save(&self, record: &StoredSession) -> Result<(), SessionError> {
        let payload = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory backend for tests and headless shells. Nothing survives the
/// process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    record: Mutex<Option<StoredSession>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        Ok(self
            .record
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn save(&self, record: &StoredSession) -> Result<(), SessionError> {
        *self
            .record
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self
            .record
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}
