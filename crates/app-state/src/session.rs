//! Persistence of the single signed-in profile across restarts.
//!
//! Exactly one record exists, stored under a fixed key and always read or
//! overwritten as a whole.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::SessionError;
use crate::profile::UserProfile;

/// Fixed identifier of the persisted profile record.
pub const SESSION_KEY: &str = "user";

/// Key-value persistence for one [`UserProfile`].
///
/// Access is synchronous and single-writer.
pub trait SessionStore {
    /// Overwrite any stored profile.
    fn save(&self, profile: &UserProfile) -> Result<(), SessionError>;

    /// Read the stored profile, if any.
    fn load(&self) -> Result<Option<UserProfile>, SessionError>;

    /// Remove the stored profile. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}

fn encode(profile: &UserProfile) -> Result<String, SessionError> {
    serde_json::to_string(profile).map_err(SessionError::Serialize)
}

fn decode(raw: &str) -> Result<UserProfile, SessionError> {
    serde_json::from_str(raw).map_err(SessionError::Malformed)
}

/// A session store backed by one JSON file, `<dir>/user.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store keeping its record inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", SESSION_KEY)),
        }
    }

    /// Location of the record.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, profile: &UserProfile) -> Result<(), SessionError> {
        let body = encode(profile)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Replace the record in one rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;

        info!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<UserProfile>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode(&raw).map(Some),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored session");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Session cleared");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// An in-memory session store holding the serialized record.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: RefCell<Option<String>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a raw record, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            record: RefCell::new(Some(raw.into())),
        }
    }

    /// Whether a record is present.
    pub fn has_record(&self) -> bool {
        self.record.borrow().is_some()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, profile: &UserProfile) -> Result<(), SessionError> {
        let body = encode(profile)?;
        *self.record.borrow_mut() = Some(body);
        Ok(())
    }

    fn load(&self) -> Result<Option<UserProfile>, SessionError> {
        self.record.borrow().as_deref().map(decode).transpose()
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.record.borrow_mut().take();
        Ok(())
    }
}
