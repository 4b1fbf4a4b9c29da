//! Key-value storage abstraction.
//!
//! The platform's browser frontends keep session state in local storage or
//! cookies; the operator console keeps the same namespace in a single JSON
//! document on disk. The trait is deliberately small: string keys, string
//! values, full enumeration, full wipe.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;

/// Errors that can occur while accessing the storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The storage file could not be read or written.
    #[error("Failed to access storage file: {0}")]
    Io(#[from] std::io::Error),

    /// The storage file exists but is not a valid JSON string map.
    #[error("Storage file is not a valid JSON document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A string key-value namespace.
///
/// Implementations are shared behind an `Arc` and must tolerate concurrent
/// use from the async runtime, even though the host application is a single
/// cooperative frontend.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Returns a snapshot of every stored key/value pair.
    fn get_all(&self) -> Result<BTreeMap<String, String>, StorageError>;

    /// Removes every stored value.
    fn clear_all(&self) -> Result<(), StorageError>;
}

/// File-backed store: one JSON object per store, persisted on every write.
pub struct FileStore {
    path: PathBuf,
    cells: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens (or creates) a store at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file exists but cannot be read,
    /// and [`StorageError::Malformed`] if it is not a JSON string map.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let cells = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = cells.len(), "Opened storage file");
        Ok(Self {
            path,
            cells: Mutex::new(cells),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.cells.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, cells: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let document = serde_json::to_string_pretty(cells)?;
        fs::write(&self.path, document)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut cells = self.lock();
        cells.insert(key.to_string(), value.to_string());
        self.persist(&cells)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut cells = self.lock();
        cells.remove(key);
        self.persist(&cells)
    }

    fn get_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        Ok(self.lock().clone())
    }

    fn clear_all(&self) -> Result<(), StorageError> {
        let mut cells = self.lock();
        cells.clear();
        self.persist(&cells)
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    cells: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.cells.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }

    fn get_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        Ok(self.lock().clone())
    }

    fn clear_all(&self) -> Result<(), StorageError> {
        self.lock().clear();
        Ok(())
    }
}
