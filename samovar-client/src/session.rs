//! Persistent session store
//!
//! File-backed JSON key-value store for session-scoped client state:
//! auth token, current user, table context, guest mode, and the cart.
//! Writes persist synchronously; a missing or corrupt file starts the
//! store empty instead of failing.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cart::CartLine;
use shared::client::UserInfo;
use shared::models::TableContext;

pub const KEY_TOKEN: &str = "token";
pub const KEY_USER: &str = "user";
pub const KEY_CURRENT_TABLE: &str = "current_table";
pub const KEY_GUEST_MODE: &str = "guest_mode";
pub const KEY_CART: &str = "cart";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistent session store
///
/// One JSON object per store file. Single writer per process; views
/// receive it by injection, never as an ambient global.
#[derive(Debug)]
pub struct SessionStore {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl SessionStore {
    /// Create an empty store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
            data: Map::new(),
        }
    }

    /// Load a store from file
    ///
    /// A missing or unreadable file starts the store empty; corrupt
    /// JSON is discarded with a warning.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let file_path = path.as_ref().to_path_buf();

        let data = if file_path.exists() {
            match std::fs::read_to_string(&file_path) {
                Ok(content) => match serde_json::from_str::<Map<String, Value>>(&content) {
                    Ok(data) => data,
                    Err(e) => {
                        tracing::warn!(path = %file_path.display(), error = %e, "Corrupt session file, starting empty");
                        Map::new()
                    }
                },
                Err(e) => {
                    tracing::warn!(path = %file_path.display(), error = %e, "Unreadable session file, starting empty");
                    Map::new()
                }
            }
        } else {
            Map::new()
        };

        Self { file_path, data }
    }

    /// Persist the store to disk
    pub fn save(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }

    /// Get a value by key
    ///
    /// A stored value that fails to deserialize is treated as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.data.get(key)?.clone();
        match serde_json::from_value(value) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding malformed session value");
                None
            }
        }
    }

    /// Set a value and persist
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), SessionError> {
        let value = serde_json::to_value(value)?;
        self.data.insert(key.to_string(), value);
        self.save()?;
        tracing::debug!(key = %key, "Session value updated");
        Ok(())
    }

    /// Remove a value and persist
    pub fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        if self.data.remove(key).is_some() {
            self.save()?;
            tracing::debug!(key = %key, "Session value removed");
        }
        Ok(())
    }

    /// Wipe every session-scoped key and persist (logout)
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.data.clear();
        self.save()?;
        tracing::info!("Session cleared");
        Ok(())
    }

    // ========== Typed accessors ==========

    pub fn token(&self) -> Option<String> {
        self.get(KEY_TOKEN)
    }

    pub fn set_token(&mut self, token: &str) -> Result<(), SessionError> {
        self.set(KEY_TOKEN, &token)
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.get(KEY_USER)
    }

    pub fn set_current_user(&mut self, user: &UserInfo) -> Result<(), SessionError> {
        self.set(KEY_USER, user)
    }

    pub fn current_table(&self) -> Option<TableContext> {
        self.get(KEY_CURRENT_TABLE)
    }

    pub fn set_current_table(&mut self, table: &TableContext) -> Result<(), SessionError> {
        self.set(KEY_CURRENT_TABLE, table)
    }

    /// Guest mode is stored as the string "true" or absent
    pub fn guest_mode(&self) -> bool {
        self.get::<String>(KEY_GUEST_MODE).as_deref() == Some("true")
    }

    pub fn set_guest_mode(&mut self, enabled: bool) -> Result<(), SessionError> {
        if enabled {
            self.set(KEY_GUEST_MODE, &"true")
        } else {
            self.remove(KEY_GUEST_MODE)
        }
    }

    pub fn cart(&self) -> Vec<CartLine> {
        self.get(KEY_CART).unwrap_or_default()
    }

    pub fn set_cart(&mut self, lines: &[CartLine]) -> Result<(), SessionError> {
        self.set(KEY_CART, &lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn test_set_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let user = UserInfo {
            id: 1,
            username: "anna".to_string(),
            role: Role::User,
            restaurant_id: Some(9),
        };
        store.set_current_user(&user).unwrap();
        store.set_token("tok-123").unwrap();

        let loaded = store.current_user().unwrap();
        assert_eq!(loaded.username, "anna");
        assert_eq!(loaded.role, Role::User);
        assert_eq!(store.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_values_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::new(&path);
        store.set_token("tok-456").unwrap();
        store.set_guest_mode(true).unwrap();

        let reloaded = SessionStore::load(&path);
        assert_eq!(reloaded.token().as_deref(), Some("tok-456"));
        assert!(reloaded.guest_mode());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionStore::load(&path);
        assert!(store.token().is_none());
    }

    #[test]
    fn test_malformed_value_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"user": "not an object"}"#).unwrap();

        let store = SessionStore::load(&path);
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_clear_wipes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::new(&path);
        store.set_token("tok").unwrap();
        store.set_guest_mode(true).unwrap();
        store.clear().unwrap();

        assert!(store.token().is_none());
        assert!(!store.guest_mode());

        let reloaded = SessionStore::load(&path);
        assert!(reloaded.token().is_none());
    }

    #[test]
    fn test_guest_mode_absent_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(!store.guest_mode());
        store.set_guest_mode(true).unwrap();
        assert!(store.guest_mode());
        store.set_guest_mode(false).unwrap();
        assert!(!store.guest_mode());
    }
}
