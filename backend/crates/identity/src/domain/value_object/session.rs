//! Session Token Claims
//!
//! The signed payload of a stateless session token, and the identity that a
//! successful verification yields.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::token::Expiring;
use serde::{Deserialize, Serialize};

/// Claims embedded in a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID
    pub sub: UserId,
    /// User name at issuance
    pub username: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expires at (Unix seconds)
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(user_id: UserId, username: impl Into<String>, issued_at: DateTime<Utc>, ttl_secs: i64) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: user_id,
            username: username.into(),
            iat,
            exp: iat + ttl_secs,
        }
    }

    pub fn expires_at_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl Expiring for SessionClaims {
    fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// Identity proven by a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub user_name: String,
}

impl From<SessionClaims> for AuthenticatedUser {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.sub,
            user_name: claims.username,
        }
    }
}
