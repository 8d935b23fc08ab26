//! Society Marketplace engine library.
//!
//! A local-first marketplace: users register and log in, list products,
//! browse and filter the catalog, and like items. All persistence goes
//! through a local key-value store of JSON documents - there is no server
//! and no network protocol.
//!
//! # Architecture
//!
//! - [`storage`] - key-value persistence: a raw [`storage::StorageBackend`]
//!   trait with file and in-memory implementations, and the typed
//!   [`storage::LocalStore`] facade used by everything else
//! - [`models`] - the persisted entity records
//! - [`services`] - session/auth lifecycle and catalog operations
//! - [`seed`] - idempotent demo-data bootstrap
//! - [`config`] - environment-derived configuration
//!
//! # Persistence contract
//!
//! The store favors availability over consistency: reads that find nothing
//! (or fail to parse) return empty defaults, failed writes are logged and
//! dropped, and nothing here is a system of record. Overlapping writes to
//! the same collection are last-writer-wins with no merge - acceptable for
//! a single operator per data directory, and documented rather than locked
//! away.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod models;
pub mod seed;
pub mod services;
pub mod storage;
