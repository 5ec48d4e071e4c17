//! Session Token Issuance and Verification
//!
//! Stateless: a token is a signed [`SessionClaims`] payload. Verification is
//! pure computation over the process-wide secret in [`IdentityConfig`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::token;

use crate::application::config::IdentityConfig;
use crate::domain::value_object::session::{AuthenticatedUser, SessionClaims};
use crate::error::{IdentityError, IdentityResult};

/// Sign a token for `user_id`, valid for `config.token_ttl` from `now`
pub fn issue_token(
    config: &IdentityConfig,
    user_id: UserId,
    user_name: &str,
    now: DateTime<Utc>,
) -> IdentityResult<(String, SessionClaims)> {
    let claims = SessionClaims::new(user_id, user_name, now, config.token_ttl_secs());
    let signed = token::sign(&config.token_secret, &claims)
        .map_err(|e| IdentityError::Internal(e.to_string()))?;
    Ok((signed, claims))
}

/// Verify token use case
#[derive(Clone)]
pub struct VerifyTokenUseCase {
    config: Arc<IdentityConfig>,
}

impl VerifyTokenUseCase {
    pub fn new(config: Arc<IdentityConfig>) -> Self {
        Self { config }
    }

    /// Verify against the current time
    pub fn execute(&self, token: &str) -> IdentityResult<AuthenticatedUser> {
        self.execute_at(token, Utc::now())
    }

    /// Verify against an explicit clock
    ///
    /// Every failure collapses into `InvalidToken`; the reason is only
    /// logged at debug level.
    pub fn execute_at(&self, token: &str, now: DateTime<Utc>) -> IdentityResult<AuthenticatedUser> {
        token::verify::<SessionClaims>(&self.config.token_secret, token, now.timestamp())
            .map(AuthenticatedUser::from)
            .map_err(|reason| {
                tracing::debug!(reason = %reason, "Session token rejected");
                IdentityError::InvalidToken
            })
    }
}
