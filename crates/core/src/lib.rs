//! Society Marketplace Core - Shared types library.
//!
//! This crate provides common types used across all Society Marketplace
//! components:
//! - `marketplace` - The engine library (storage, auth, catalog, seeding)
//! - `cli` - Command-line surface for browsing and managing listings
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, prices, and
//!   the fixed category set

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
