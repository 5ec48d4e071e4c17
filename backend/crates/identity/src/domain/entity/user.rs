//! User Entity
//!
//! A registered user. Created on registration and never mutated by this
//! service.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

/// User entity
///
/// `password_hash` is persisted but never leaves the identity crate in a
/// response; its `Debug` output is redacted.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// User name (unique, used in URL paths)
    pub user_name: UserName,
    /// Email (unique, used for login)
    pub email: Email,
    /// Argon2id hash
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(user_name: UserName, email: Email, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
