//! In-memory storage for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{StorageBackend, StoreError};

/// A `HashMap` behind a lock. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let data = self
            .data
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        data.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        data.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        let data = self
            .data
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(data.contains_key(key))
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        data.clear();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_until_set() {
        let store = MemoryStore::new();
        assert!(store.get("users").unwrap().is_none());
        store.set("users", "[]").unwrap();
        assert_eq!(store.get("users").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_contains_distinguishes_empty_from_absent() {
        let store = MemoryStore::new();
        assert!(!store.contains("products").unwrap());
        store.set("products", "[]").unwrap();
        assert!(store.contains("products").unwrap());
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.clear().unwrap();
        assert!(store.get("a").unwrap().is_none());
    }
}
