//! Storage backends for session state

use std::collections::HashMap;
use std::path::PathBuf;

use parking_lot::RwLock;
use tracing::warn;

/// Key-value storage port for session state
///
/// Mirrors browser local-storage semantics: writes are assumed to succeed,
/// so the interface is infallible. Implementations log failures instead of
/// surfacing them.
pub trait SessionStorage: Send + Sync {
    /// Get the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str);

    /// Remove the value stored under `key`; no-op when absent
    fn remove(&self, key: &str);

    /// Remove every stored entry
    fn clear(&self);
}

/// In-memory storage backend
///
/// The default for tests and for embedding contexts without a persistence
/// directory.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }

    fn clear(&self) {
        self.entries.write().clear();
    }
}

/// File-backed storage persisting entries as a flat JSON object
///
/// Loads once at construction and writes through on every mutation. A write
/// failure leaves the in-memory state authoritative for the rest of the
/// process and is logged rather than propagated, matching the infallible
/// port contract.
#[derive(Debug)]
pub struct FileSessionStorage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileSessionStorage {
    /// Open (or create) the storage file at `path`
    ///
    /// Unreadable or malformed content is discarded with a diagnostic; the
    /// store starts empty in that case.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "discarding malformed session file");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { path, entries: RwLock::new(entries) }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        let payload = match serde_json::to_string_pretty(entries) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "failed to serialize session state");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %err, "failed to create session directory");
                return;
            }
        }

        if let Err(err) = std::fs::write(&self.path, payload) {
            warn!(path = %self.path.display(), error = %err, "failed to persist session state");
        }
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write();
        entries.remove(key);
        self.persist(&entries);
    }

    fn clear(&self) {
        let mut entries = self.entries.write();
        entries.clear();
        self.persist(&entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_set_get_remove() {
        let storage = MemorySessionStorage::new();
        assert!(storage.get("token").is_none());

        storage.set("token", "t1");
        assert_eq!(storage.get("token").as_deref(), Some("t1"));

        storage.set("token", "t2");
        assert_eq!(storage.get("token").as_deref(), Some("t2"));

        storage.remove("token");
        assert!(storage.get("token").is_none());
    }

    #[test]
    fn memory_storage_clear_removes_everything() {
        let storage = MemorySessionStorage::new();
        storage.set("token", "t1");
        storage.set("user", "{}");
        storage.clear();
        assert!(storage.get("token").is_none());
        assert!(storage.get("user").is_none());
    }

    #[test]
    fn file_storage_round_trips_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let storage = FileSessionStorage::open(&path);
            storage.set("token", "t1");
            storage.set("user", r#"{"id":1}"#);
        }

        let reopened = FileSessionStorage::open(&path);
        assert_eq!(reopened.get("token").as_deref(), Some("t1"));
        assert_eq!(reopened.get("user").as_deref(), Some(r#"{"id":1}"#));
    }

    #[test]
    fn file_storage_starts_empty_on_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let storage = FileSessionStorage::open(&path);
        assert!(storage.get("token").is_none());
    }

    #[test]
    fn file_storage_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileSessionStorage::open(&path);
        storage.set("token", "t1");
        storage.remove("token");
        drop(storage);

        let reopened = FileSessionStorage::open(&path);
        assert!(reopened.get("token").is_none());
    }
}
