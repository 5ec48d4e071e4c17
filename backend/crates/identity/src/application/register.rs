//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::IdentityConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{IdentityError, IdentityResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Register output (no password material)
#[derive(Debug, Clone)]
pub struct RegisterOutput {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<IdentityConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<IdentityConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> IdentityResult<RegisterOutput> {
        let user_name = UserName::new(&input.user_name)?;
        let email = Email::new(&input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        // Fast path only; the unique constraints decide under concurrency
        if self
            .user_repo
            .exists_by_user_name_or_email(&user_name, &email)
            .await?
        {
            return Err(IdentityError::DuplicateCredential);
        }

        // Argon2 is CPU-bound; keep it off the async workers
        let config = self.config.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, config.pepper())
        })
        .await??;

        let user = User::new(user_name, email, password_hash);
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id,
            user_name: user.user_name.into_inner(),
            email: user.email.as_str().to_string(),
        })
    }
}
