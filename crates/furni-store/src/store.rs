//! Typed JSON store over a raw string backend.

use serde::{de::DeserializeOwned, Serialize};

use crate::{StorageBackend, StoreError};

/// Typed key-value store with automatic JSON serialization.
///
/// # Example
///
/// ```
/// use furni_store::{keys, MemoryBackend, Store};
///
/// let mut store = Store::new(MemoryBackend::new());
/// store.set(keys::LANG, &"ru").unwrap();
/// let lang: Option<String> = store.get(keys::LANG).unwrap();
/// assert_eq!(lang.as_deref(), Some("ru"));
/// ```
pub struct Store<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Store<B> {
    /// Create a store over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get a value, `None` if the key is absent.
    ///
    /// A value that is present but no longer parses as `T` is logged
    /// and treated as absent; persisted state is best-effort, never
    /// fatal to the session.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.read(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding corrupt persisted value");
                Ok(None)
            }
        }
    }

    /// Set a value, replacing any existing value under the key.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.backend.write(key, &raw)
    }

    /// Remove a key.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)
    }

    /// Read a value and remove it in the same call.
    ///
    /// Used for the transient scroll-target key, which crosses
    /// exactly one page navigation.
    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, StoreError> {
        let value = self.get(key)?;
        if value.is_some() {
            self.backend.remove(key)?;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keys, FailingBackend, MemoryBackend};

    #[test]
    fn get_absent_key() {
        let store = Store::new(MemoryBackend::new());
        let value: Option<String> = store.get(keys::CART).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn set_then_get() {
        let mut store = Store::new(MemoryBackend::new());
        store.set(keys::THEME, &"dark").unwrap();
        let value: Option<String> = store.get(keys::THEME).unwrap();
        assert_eq!(value.as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_value_reads_as_absent() {
        let mut backend = MemoryBackend::new();
        backend.write(keys::CART, "{not json").unwrap();
        let store = Store::new(backend);
        let value: Option<Vec<u32>> = store.get(keys::CART).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn take_removes_after_read() {
        let mut store = Store::new(MemoryBackend::new());
        store.set(keys::SCROLL_TO, &"p3").unwrap();

        let first: Option<String> = store.take(keys::SCROLL_TO).unwrap();
        assert_eq!(first.as_deref(), Some("p3"));

        let second: Option<String> = store.take(keys::SCROLL_TO).unwrap();
        assert_eq!(second, None);
    }

    #[test]
    fn backend_failure_surfaces() {
        let mut store = Store::new(FailingBackend);
        let err = store.set(keys::CART, &vec![1, 2]).unwrap_err();
        assert!(err.is_backend());
    }
}
