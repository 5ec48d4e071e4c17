//! Acting User Authorization
//!
//! Every exchange route is addressed as `/users/{user_name}/...`. The
//! path user is resolved to an id first, then must be the subject of the
//! verified bearer token.

use std::sync::Arc;

use identity::{AuthenticatedUser, ResolveUserIdUseCase, UserRepository};
use kernel::id::UserId;

use crate::error::{ExchangeError, ExchangeResult};

/// Authorize acting user use case
pub struct AuthorizeActingUserUseCase<U>
where
    U: UserRepository,
{
    resolve: ResolveUserIdUseCase<U>,
}

impl<U> AuthorizeActingUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self {
            resolve: ResolveUserIdUseCase::new(user_repo),
        }
    }

    /// Unknown path user → `UserNotFound`; someone else's path → `Forbidden`
    pub async fn execute(
        &self,
        path_user_name: &str,
        verified: &AuthenticatedUser,
    ) -> ExchangeResult<UserId> {
        let user_id = self.resolve.execute(path_user_name).await?;

        if user_id != verified.user_id {
            return Err(ExchangeError::Forbidden);
        }

        Ok(user_id)
    }
}
