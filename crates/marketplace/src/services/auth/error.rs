//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// All of these are domain-validation failures meant to be shown to the
/// user and retried; none is fatal.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] society_marketplace_core::EmailError),

    /// No user in the directory has this email.
    #[error("user not found")]
    UserNotFound,

    /// Signup attempted with an email already in the directory.
    #[error("an account with this email already exists")]
    UserAlreadyExists,

    /// The display name is blank.
    #[error("name cannot be empty")]
    EmptyName,
}
