//! Authenticate Use Case
//!
//! Verifies email + password and issues a signed session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::application::config::IdentityConfig;
use crate::application::session_token::issue_token;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{IdentityError, IdentityResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub email: String,
    pub password: String,
}

/// Authenticate output
pub struct AuthenticateOutput {
    /// Bearer token
    pub token: String,
    /// Token expiry
    pub expires_at: DateTime<Utc>,
    pub user_id: UserId,
    pub user_name: String,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<IdentityConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<IdentityConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> IdentityResult<AuthenticateOutput> {
        // No registered account can hold an unparseable address
        let email = Email::new(&input.email).map_err(|_| IdentityError::UserNotFound)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(IdentityError::UserNotFound)?;

        // An unusable password can never match a stored hash
        let raw_password =
            RawPassword::new(input.password).map_err(|_| IdentityError::InvalidCredential)?;

        let config = self.config.clone();
        let password_hash = user.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || {
            password_hash.verify(&raw_password, config.pepper())
        })
        .await?;

        if !password_valid {
            return Err(IdentityError::InvalidCredential);
        }

        let (token, claims) =
            issue_token(&self.config, user.user_id, user.user_name.as_str(), Utc::now())?;

        tracing::info!(
            user_id = %user.user_id,
            expires_at = claims.exp,
            "User authenticated"
        );

        Ok(AuthenticateOutput {
            token,
            expires_at: claims.expires_at_utc(),
            user_id: user.user_id,
            user_name: user.user_name.into_inner(),
        })
    }
}
