//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::IdentityResult;

/// Credential store
///
/// `create` must reject a duplicate user name or email with
/// `IdentityError::DuplicateCredential` atomically, regardless of any
/// earlier `exists_by_user_name_or_email` answer.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> IdentityResult<()>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> IdentityResult<Option<User>>;

    /// Find user by user name
    async fn find_by_user_name(&self, user_name: &UserName) -> IdentityResult<Option<User>>;

    /// Check if either the user name or the email is taken
    async fn exists_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> IdentityResult<bool>;
}
