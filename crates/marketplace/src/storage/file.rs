//! File-backed storage: one JSON document per key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{StorageBackend, StoreError};

/// Stores each key as `<root>/<key>.json`.
///
/// Writes go to a temp sibling first and are renamed into place, so a
/// failed write leaves the previous document intact.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a file store rooted at `root`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The root data directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.path_for(key).exists())
    }

    fn clear(&self) -> Result<(), StoreError> {
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_get_absent_key() {
        let (_dir, store) = store();
        assert!(store.get("users").unwrap().is_none());
        assert!(!store.contains("users").unwrap());
    }

    #[test]
    fn test_set_then_get() {
        let (_dir, store) = store();
        store.set("users", "[]").unwrap();
        assert_eq!(store.get("users").unwrap().as_deref(), Some("[]"));
        assert!(store.contains("users").unwrap());
    }

    #[test]
    fn test_set_overwrites() {
        let (_dir, store) = store();
        store.set("products", "[1]").unwrap();
        store.set("products", "[2]").unwrap();
        assert_eq!(store.get("products").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = store();
        store.set("currentUser", "{}").unwrap();
        store.remove("currentUser").unwrap();
        store.remove("currentUser").unwrap();
        assert!(store.get("currentUser").unwrap().is_none());
    }

    #[test]
    fn test_clear_removes_documents() {
        let (_dir, store) = store();
        store.set("users", "[]").unwrap();
        store.set("products", "[]").unwrap();
        store.clear().unwrap();
        assert!(!store.contains("users").unwrap());
        assert!(!store.contains("products").unwrap());
    }

    #[test]
    fn test_reopen_sees_existing_data() {
        let (dir, store) = store();
        store.set("users", "[\"a\"]").unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("users").unwrap().as_deref(), Some("[\"a\"]"));
    }
}
