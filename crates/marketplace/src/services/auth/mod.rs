//! Session and authentication lifecycle.
//!
//! Owns the "current user" state: loads any persisted session on
//! initialization, and exposes login, signup, and logout over the user
//! directory.

mod error;

pub use error::AuthError;

use std::time::Duration;

use secrecy::SecretString;

use society_marketplace_core::{Email, UserId};

use crate::models::User;
use crate::storage::LocalStore;

/// The session lifecycle.
///
/// `Loading` exists only between construction and [`AuthService::initialize`];
/// after that the state is `Authenticated` or `Anonymous` and never returns
/// to `Loading`.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    /// The persisted session has not been read yet.
    #[default]
    Loading,
    /// A user is logged in on this device.
    Authenticated(User),
    /// Nobody is logged in.
    Anonymous,
}

/// Session/auth manager.
///
/// All operations are whole-value transformations over the directory and
/// the session slot: each applies fully or not at all from the caller's
/// perspective (subject to the store's best-effort write semantics).
/// `login` and `signup` suspend for the configured simulated latency
/// before completing, emulating a network round-trip; overlapping calls
/// on the same store are last-writer-wins.
pub struct AuthService<'a> {
    store: &'a LocalStore,
    latency: Duration,
    state: SessionState,
}

impl<'a> AuthService<'a> {
    /// Create a manager over `store`. The session starts in
    /// [`SessionState::Loading`] until [`Self::initialize`] runs.
    #[must_use]
    pub const fn new(store: &'a LocalStore, latency: Duration) -> Self {
        Self {
            store,
            latency,
            state: SessionState::Loading,
        }
    }

    /// Read the persisted session and leave the loading state.
    pub fn initialize(&mut self) {
        self.state = match self.store.current_user() {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Anonymous,
        };
    }

    /// The logged-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Loading | SessionState::Anonymous => None,
        }
    }

    /// Whether the persisted session has not been read yet.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    /// Log in by email.
    ///
    /// Looks the email up in the directory (case-sensitive exact match,
    /// first match wins) and establishes the session on a hit.
    ///
    /// The password is accepted but NOT verified against any stored
    /// credential - nothing is stored to verify it against. This is a
    /// stand-in for a real credential check, kept deliberately (see
    /// DESIGN.md); anything beyond a demo needs an actual auth backend
    /// here.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] if the email is malformed and
    /// [`AuthError::UserNotFound`] if no directory entry matches.
    pub async fn login(
        &mut self,
        email: &str,
        _password: SecretString,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        tokio::time::sleep(self.latency).await;

        let user = self
            .store
            .users()
            .into_iter()
            .find(|u| u.email == email)
            .ok_or(AuthError::UserNotFound)?;

        self.store.save_current_user(&user);
        self.state = SessionState::Authenticated(user.clone());
        tracing::info!(user_id = %user.id, "logged in");
        Ok(user)
    }

    /// Register a new user and establish the session.
    ///
    /// The password is accepted but not stored (see [`Self::login`]).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] for a malformed email,
    /// [`AuthError::EmptyName`] for a blank display name, and
    /// [`AuthError::UserAlreadyExists`] (directory unchanged) if the email
    /// is already registered.
    pub async fn signup(
        &mut self,
        email: &str,
        _password: SecretString,
        name: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::EmptyName);
        }

        tokio::time::sleep(self.latency).await;

        let mut users = self.store.users();
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::UserAlreadyExists);
        }

        let user = User {
            id: UserId::generate(),
            email,
            name: name.to_owned(),
            created_at: chrono::Utc::now(),
        };

        users.push(user.clone());
        self.store.save_users(&users);
        self.store.save_current_user(&user);
        self.state = SessionState::Authenticated(user.clone());
        tracing::info!(user_id = %user.id, "signed up");
        Ok(user)
    }

    /// Clear the session. The directory is untouched.
    pub fn logout(&mut self) {
        self.store.clear_current_user();
        self.state = SessionState::Anonymous;
        tracing::info!("logged out");
    }
}
