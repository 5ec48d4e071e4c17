//! Resolve User Use Case
//!
//! Translates a path-supplied user name into the stable user id.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{IdentityError, IdentityResult};

/// Resolve user id use case
pub struct ResolveUserIdUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ResolveUserIdUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// A name that fails validation cannot belong to anyone, so it is
    /// reported as `UserNotFound` rather than a validation error.
    pub async fn execute(&self, user_name: &str) -> IdentityResult<UserId> {
        let user_name = UserName::new(user_name).map_err(|_| IdentityError::UserNotFound)?;

        self.user_repo
            .find_by_user_name(&user_name)
            .await?
            .map(|user| user.user_id)
            .ok_or(IdentityError::UserNotFound)
    }
}
