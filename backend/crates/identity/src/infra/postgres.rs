//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::unique_violation;
use kernel::id::UserId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword,
};
use crate::error::{IdentityError, IdentityResult};

/// PostgreSQL-backed identity repository
#[derive(Clone)]
pub struct PgIdentityRepository {
    pool: PgPool,
}

impl PgIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgIdentityRepository {
    async fn create(&self, user: &User) -> IdentityResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                user_name,
                email,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.user_name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> IdentityResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                email,
                password_hash,
                created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::database("users.find_by_email", e))?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> IdentityResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                email,
                password_hash,
                created_at
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::database("users.find_by_user_name", e))?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> IdentityResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_name = $1 OR email = $2)",
        )
        .bind(user_name.as_str())
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| IdentityError::database("users.exists", e))?;

        Ok(exists)
    }
}

/// Both `users_user_name_key` and `users_email_key` mean the credential is taken
fn insert_error(err: sqlx::Error) -> IdentityError {
    match unique_violation(&err) {
        Some(_) => IdentityError::DuplicateCredential,
        None => IdentityError::database("users.insert", err),
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    user_name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> IdentityResult<User> {
        let password_hash = UserPassword::from_db(self.password_hash)
            .map_err(|e| IdentityError::Internal(format!("Stored password hash: {}", e)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            user_name: UserName::from_db(self.user_name),
            email: Email::from_db(self.email),
            password_hash,
            created_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use kernel::testing::StubDatabaseError;

    use super::*;

    #[test]
    fn test_unique_violation_on_insert_is_duplicate_credential() {
        for constraint in ["users_user_name_key", "users_email_key"] {
            let err = insert_error(StubDatabaseError::unique(constraint));
            assert!(matches!(err, IdentityError::DuplicateCredential), "{constraint}");
        }
    }

    #[test]
    fn test_other_insert_failures_stay_database_errors() {
        let not_null = insert_error(StubDatabaseError::new("23502", None).into());
        assert!(matches!(
            not_null,
            IdentityError::Database { operation: "users.insert", .. }
        ));

        let timeout = insert_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(timeout, IdentityError::Database { .. }));
    }
}
