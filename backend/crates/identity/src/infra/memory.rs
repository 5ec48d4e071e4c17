//! In-Memory Repository
//!
//! Process-local credential store for tests and local runs without a
//! database. The uniqueness check and the insert happen under one write
//! lock, matching the atomicity of the unique constraints in PostgreSQL.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{IdentityError, IdentityResult};

#[derive(Clone, Default)]
pub struct InMemoryIdentityRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserRepository for InMemoryIdentityRepository {
    async fn create(&self, user: &User) -> IdentityResult<()> {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.user_name == user.user_name || u.email == user.email)
        {
            return Err(IdentityError::DuplicateCredential);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> IdentityResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> IdentityResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.user_name == user_name).cloned())
    }

    async fn exists_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> IdentityResult<bool> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .any(|u| &u.user_name == user_name || &u.email == email))
    }
}
