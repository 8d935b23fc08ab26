//! Typed facade over the raw backend.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use society_marketplace_core::{ProductId, UserId};

use super::{FileStore, MemoryStore, StorageBackend, StoreError, keys};
use crate::models::{Product, User};

/// Typed read/write access to the four persisted collections.
///
/// This is the persistence contract the rest of the system builds on:
///
/// - every read that finds no stored value, or whose stored value fails to
///   parse, returns the empty default (`None` / empty `Vec`) and reports
///   the fault to the diagnostic channel only;
/// - every write either fully succeeds or is logged and dropped - callers
///   cannot observe write failure.
///
/// Best-effort by design: the store is a convenience cache, not a system
/// of record. There is no transaction spanning collections, so readers of
/// the liked-index must tolerate product ids that no longer exist in the
/// catalog.
///
/// All reads hand out owned copies; mutations write back the full
/// collection. There is no partial update primitive.
pub struct LocalStore {
    backend: Box<dyn StorageBackend>,
}

impl LocalStore {
    /// Wrap an arbitrary backend.
    #[must_use]
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Open a [`FileStore`] rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the data directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Ok(Self::new(FileStore::open(root)?))
    }

    /// An ephemeral store for tests and dry runs.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    // =========================================================================
    // Session slot
    // =========================================================================

    /// The persisted current user, if a session exists.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.read_json(keys::CURRENT_USER)
    }

    /// Persist `user` as the current session.
    pub fn save_current_user(&self, user: &User) {
        self.write_json(keys::CURRENT_USER, user);
    }

    /// Clear the session slot. The directory is untouched.
    pub fn clear_current_user(&self) {
        if let Err(e) = self.backend.remove(keys::CURRENT_USER) {
            tracing::error!(key = keys::CURRENT_USER, error = %e, "failed to clear stored value");
        }
    }

    // =========================================================================
    // User directory
    // =========================================================================

    /// The full user directory.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.read_json(keys::USERS).unwrap_or_default()
    }

    /// Replace the user directory.
    pub fn save_users(&self, users: &[User]) {
        self.write_json(keys::USERS, &users);
    }

    // =========================================================================
    // Product catalog
    // =========================================================================

    /// The full product catalog, in stored order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.read_json(keys::PRODUCTS).unwrap_or_default()
    }

    /// Replace the product catalog.
    pub fn save_products(&self, products: &[Product]) {
        self.write_json(keys::PRODUCTS, &products);
    }

    // =========================================================================
    // Liked-index
    // =========================================================================

    /// The liked product ids for one user, in insertion order.
    #[must_use]
    pub fn liked_product_ids(&self, user_id: &UserId) -> Vec<ProductId> {
        self.all_liked().remove(user_id).unwrap_or_default()
    }

    /// Replace one user's liked product ids.
    ///
    /// Read-modify-write of the whole index document; overlapping writers
    /// are last-writer-wins.
    pub fn save_liked_product_ids(&self, user_id: &UserId, ids: Vec<ProductId>) {
        let mut index = self.all_liked();
        index.insert(user_id.clone(), ids);
        self.write_json(keys::LIKED_PRODUCTS, &index);
    }

    /// Replace the entire liked-index. Used by seeding.
    pub fn save_liked_index(&self, index: &BTreeMap<UserId, Vec<ProductId>>) {
        self.write_json(keys::LIKED_PRODUCTS, index);
    }

    fn all_liked(&self) -> BTreeMap<UserId, Vec<ProductId>> {
        self.read_json(keys::LIKED_PRODUCTS).unwrap_or_default()
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    /// Whether anything (even an explicitly empty collection) is stored
    /// under `key`. Seeding keys off this, not off emptiness.
    #[must_use]
    pub fn collection_present(&self, key: &str) -> bool {
        match self.backend.contains(key) {
            Ok(present) => present,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to probe stored value");
                false
            }
        }
    }

    /// Remove every stored collection. Development and test helper.
    pub fn clear_all(&self) {
        if let Err(e) = self.backend.clear() {
            tracing::error!(error = %e, "failed to clear store");
        }
    }

    // =========================================================================
    // Best-effort plumbing
    // =========================================================================

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to read stored value");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(key, error = %e, "stored value failed to parse, treating as absent");
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to serialize value, dropping write");
                return;
            }
        };

        if let Err(e) = self.backend.set(key, &raw) {
            tracing::error!(key, error = %e, "failed to write stored value, dropping write");
        }
    }
}
