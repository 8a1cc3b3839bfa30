//! Application session state with pluggable persistence
//!
//! Replaces the dashboard's global auth/theme state: an explicit
//! session object that loads from its storage backend on construction
//! and writes back on every change. The storage backend is a trait so
//! callers can swap the JSON file for anything else.

use serde::{Deserialize, Serialize};
use shared::client::User;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Session data persisted between runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    /// Signed-in user, if any
    pub user: Option<User>,
    /// Dark mode preference
    #[serde(default)]
    pub dark_mode: bool,
}

/// Persistence seam for session data
pub trait SessionStorage: Send + Sync {
    /// Load the saved session, `None` when absent or unreadable
    fn load(&self) -> Option<SessionData>;
    /// Save the session
    fn save(&self, data: &SessionData) -> std::io::Result<()>;
    /// Remove the saved session
    fn clear(&self) -> std::io::Result<()>;
    /// Check whether a saved session exists
    fn exists(&self) -> bool;
}

/// JSON file storage
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Create a storage rooted at `base_path/filename`
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        Self {
            path: base_path.into().join(filename),
        }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Get the storage path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Option<SessionData> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    fn save(&self, data: &SessionData) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)
    }

    fn clear(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// In-memory storage, mainly for tests
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    data: Mutex<Option<SessionData>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Option<SessionData> {
        self.data.lock().expect("session storage lock poisoned").clone()
    }

    fn save(&self, data: &SessionData) -> std::io::Result<()> {
        *self.data.lock().expect("session storage lock poisoned") = Some(data.clone());
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        *self.data.lock().expect("session storage lock poisoned") = None;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.data.lock().expect("session storage lock poisoned").is_some()
    }
}

/// Application session
///
/// Loads saved state on construction and saves on every mutation, so
/// there is never a dirty in-memory copy.
pub struct AppSession<S: SessionStorage> {
    data: SessionData,
    storage: S,
}

impl<S: SessionStorage> AppSession<S> {
    /// Create a session, loading persisted state if present
    pub fn new(storage: S) -> Self {
        let data = storage.load().unwrap_or_default();
        Self { data, storage }
    }

    /// Current user, if signed in
    pub fn user(&self) -> Option<&User> {
        self.data.user.as_ref()
    }

    /// Dark mode preference
    pub fn dark_mode(&self) -> bool {
        self.data.dark_mode
    }

    /// Sign a user in and persist the session
    pub fn set_user(&mut self, user: User) -> std::io::Result<()> {
        self.data.user = Some(user);
        self.storage.save(&self.data)
    }

    /// Sign out; the session file is removed when nothing else is set
    pub fn clear_user(&mut self) -> std::io::Result<()> {
        self.data.user = None;
        if self.data == SessionData::default() {
            self.storage.clear()
        } else {
            self.storage.save(&self.data)
        }
    }

    /// Toggle dark mode and persist the session
    pub fn toggle_dark_mode(&mut self) -> std::io::Result<bool> {
        self.data.dark_mode = !self.data.dark_mode;
        self.storage.save(&self.data)?;
        Ok(self.data.dark_mode)
    }
}
