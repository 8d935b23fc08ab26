//! Key-value persistence.
//!
//! Four logical collections, each serialized as one JSON document under a
//! fixed key (see [`keys`]). The raw contract is [`StorageBackend`];
//! [`FileStore`] keeps one `<key>.json` file per collection under a data
//! directory, and [`MemoryStore`] backs tests and ephemeral runs. Typed
//! access goes through [`LocalStore`], which owns the best-effort
//! error-swallowing contract - backend errors stop here.

mod file;
mod local;
mod memory;

pub use file::FileStore;
pub use local::LocalStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Fixed keys for the four persisted collections.
///
/// These literals are the stored layout: renaming one orphans existing
/// data directories.
pub mod keys {
    /// The current session slot (`User` or absent).
    pub const CURRENT_USER: &str = "currentUser";

    /// The user directory (`User[]`).
    pub const USERS: &str = "users";

    /// The product catalog (`Product[]`).
    pub const PRODUCTS: &str = "products";

    /// The liked-index (object keyed by user id, arrays of product ids).
    pub const LIKED_PRODUCTS: &str = "likedProducts";
}

/// Errors raised by storage backends.
///
/// Callers of [`LocalStore`] never see these: the facade reports them to
/// the diagnostic channel and recovers with empty defaults / no-ops.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying store could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be parsed, or a value could not be
    /// serialized for writing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A backend-specific failure (e.g. a poisoned lock).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A key-value storage backend.
///
/// The minimal raw contract beneath [`LocalStore`]: string keys, JSON text
/// values, whole-value reads and writes. Implementations decide where the
/// bytes live.
pub trait StorageBackend: Send + Sync {
    /// Get the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// A write either fully succeeds or leaves the previous value intact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing an absent key is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Whether any value (even an empty collection) is stored under `key`.
    ///
    /// Seeding uses this to distinguish "never written" from "explicitly
    /// written empty".
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn contains(&self, key: &str) -> Result<bool, StoreError>;

    /// Remove every stored value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn clear(&self) -> Result<(), StoreError>;
}
