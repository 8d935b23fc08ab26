//! User record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use society_marketplace_core::{Email, UserId};

/// A registered user.
///
/// Created by signup and never updated or deleted afterwards - there is no
/// profile-edit or delete-account operation. The email is the directory's
/// natural uniqueness key (case-sensitive exact match).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique identifier, assigned at creation. Immutable.
    pub id: UserId,
    /// Uniqueness key for signup/login lookups.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Creation timestamp. Immutable.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_layout_is_camel_case() {
        let user = User {
            id: UserId::new("1"),
            email: Email::parse("john.doe@example.com").unwrap(),
            name: "John Doe".to_owned(),
            created_at: "2024-01-15T10:30:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["email"], "john.doe@example.com");
        assert_eq!(json["name"], "John Doe");
        assert_eq!(json["createdAt"], "2024-01-15T10:30:00Z");
    }
}
