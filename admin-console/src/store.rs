//! Persistent key/value state for the console.
//!
//! Everything the console remembers between launches goes through
//! [`StateStore`]: the bearer token and its expiry, the cached identity,
//! the selected hotel and the setup-completion hint. Keys are flat strings
//! so the file layout stays greppable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known store keys.
pub mod keys {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const TOKEN_EXPIRES_AT: &str = "token_expires_at";
    pub const USER_ID: &str = "userId";
    pub const USER_EMAIL: &str = "userEmail";
    pub const USER_NAME: &str = "userName";
    pub const USER_TYPE: &str = "userType";
    pub const USER_STATUS: &str = "userStatus";
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const SETUP_COMPLETE: &str = "setupComplete";
    pub const SELECTED_HOTEL_ID: &str = "selectedHotelId";
}

/// Keys removed together when an expired or cleared session is torn down.
pub const AUTH_KEYS: &[&str] = &[
    keys::ACCESS_TOKEN,
    keys::TOKEN_EXPIRES_AT,
    keys::USER_ID,
    keys::USER_EMAIL,
    keys::USER_NAME,
    keys::USER_TYPE,
    keys::USER_STATUS,
    keys::IS_LOGGED_IN,
];

/// String key/value persistence for console state.
pub trait StateStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);

    /// Remove a batch of keys in one operation so a session teardown never
    /// persists half-cleared.
    fn remove_many(&mut self, keys: &[&str]) {
        for key in keys {
            self.remove(key);
        }
    }
}

/// Volatile store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.data.remove(key);
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    entries: HashMap<String, String>,
}

/// JSON-file-backed store.
///
/// Reads happen against the in-memory copy; every mutation rewrites the
/// file. Write failures are logged and swallowed: a broken disk must not
/// take the console down, the session just won't survive a restart.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: StoreFile,
}

impl FileStore {
    /// Load the store from `path`, starting empty if the file is missing
    /// or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Corrupt state file, starting fresh");
                    StoreFile::default()
                }
            },
            Err(_) => StoreFile::default(),
        };
        Self { path, data }
    }

    fn save(&self) {
        let result = serde_json::to_string_pretty(&self.data)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(&self.path, json).map_err(|e| e.to_string()));
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist console state");
        }
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.data
            .entries
            .insert(key.to_string(), value.to_string());
        self.save();
    }

    fn remove(&mut self, key: &str) {
        if self.data.entries.remove(key).is_some() {
            self.save();
        }
    }

    fn remove_many(&mut self, keys: &[&str]) {
        let mut changed = false;
        for key in keys {
            changed |= self.data.entries.remove(*key).is_some();
        }
        if changed {
            self.save();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        store.set(keys::ACCESS_TOKEN, "tok");
        assert_eq!(store.get(keys::ACCESS_TOKEN).as_deref(), Some("tok"));
        store.remove(keys::ACCESS_TOKEN);
        assert_eq!(store.get(keys::ACCESS_TOKEN), None);
    }

    #[test]
    fn file_store_survives_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::load(&path);
        store.set(keys::SELECTED_HOTEL_ID, "hotel-7");
        store.set(keys::USER_EMAIL, "owner@example.com");
        drop(store);

        let store = FileStore::load(&path);
        assert_eq!(store.get(keys::SELECTED_HOTEL_ID).as_deref(), Some("hotel-7"));
        assert_eq!(store.get(keys::USER_EMAIL).as_deref(), Some("owner@example.com"));
    }

    #[test]
    fn file_store_remove_many_is_one_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::load(&path);
        for key in AUTH_KEYS {
            store.set(key, "x");
        }
        store.remove_many(AUTH_KEYS);

        let store = FileStore::load(&path);
        for key in AUTH_KEYS {
            assert_eq!(store.get(key), None, "{key} should be gone");
        }
    }

    #[test]
    fn corrupt_file_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::load(&path);
        assert_eq!(store.get(keys::ACCESS_TOKEN), None);
    }
}
