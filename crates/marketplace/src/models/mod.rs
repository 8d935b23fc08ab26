//! Persisted entity records.
//!
//! These are the shapes that land in the store, field-for-field. Both use
//! camelCase serde names so the stored JSON matches the documented layout.

pub mod product;
pub mod user;

pub use product::Product;
pub use user::User;
