//! Raw string storage backends.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::StoreError;

/// Durable string storage, keyed by name.
///
/// Implementations only move raw strings; JSON encoding lives in
/// [`crate::Store`].
pub trait StorageBackend {
    /// Read the raw value for a key, `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the raw value for a key, replacing any existing value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend. State lasts for the session only.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-per-key backend rooted at a directory.
///
/// Keys map to `<root>/<key>.json`. Keys are restricted to the fixed
/// names in [`crate::keys`], which are all safe path components.
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `root`, creating the directory if
    /// missing.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value).map_err(|e| StoreError::Backend(e.to_string()))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }
}

/// Backend that fails every operation. Test double for quota and
/// disabled-storage paths.
#[derive(Debug, Default)]
pub struct FailingBackend;

impl StorageBackend for FailingBackend {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Backend("storage unavailable".into()))
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("quota exceeded".into()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("storage unavailable".into()))
    }
}
