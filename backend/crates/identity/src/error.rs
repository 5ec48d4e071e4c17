//! Identity Error Types
//!
//! Identity-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{
    app_error::AppError,
    kind::{ErrorClass, ErrorKind},
};
use thiserror::Error;
use tracing::Level;

/// Identity-specific result type alias
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity-specific error variants
#[derive(Debug, Error)]
pub enum IdentityError {
    /// No user with the given email or user name
    #[error("User not found")]
    UserNotFound,

    /// User name or email already registered
    #[error("User name or email already exists")]
    DuplicateCredential,

    /// Password does not match
    #[error("Invalid credentials")]
    InvalidCredential,

    /// Missing, malformed, wrongly signed or expired token.
    /// The cause is never revealed to the caller.
    #[error("Invalid token")]
    InvalidToken,

    /// Malformed input field
    #[error("{0}")]
    Validation(String),

    /// Storage failure, tagged with the operation that hit it
    #[error("Database error during {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Internal error (hashing, signing, task join)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IdentityError {
    /// Wrap a storage error with the operation name used in logs
    pub fn database(operation: &'static str, source: sqlx::Error) -> Self {
        IdentityError::Database { operation, source }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::UserNotFound => ErrorKind::NotFound,
            IdentityError::DuplicateCredential => ErrorKind::Conflict,
            IdentityError::InvalidCredential | IdentityError::InvalidToken => {
                ErrorKind::Unauthorized
            }
            IdentityError::Validation(_) => ErrorKind::BadRequest,
            IdentityError::Database {
                source: sqlx::Error::PoolTimedOut | sqlx::Error::Io(_),
                ..
            } => ErrorKind::ServiceUnavailable,
            IdentityError::Database { .. } | IdentityError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a generic message; driver and hashing
    /// details stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            return AppError::new(kind, "Internal server error");
        }

        let err = AppError::new(kind, self.to_string());
        match self {
            IdentityError::InvalidToken => {
                err.with_action("Sign in again and send the token as a Bearer credential")
            }
            IdentityError::DuplicateCredential => {
                err.with_action("Choose a different user name or email")
            }
            _ => err,
        }
    }

    /// Log level, chosen by error class
    pub fn log_level(&self) -> Level {
        match self.kind().class() {
            ErrorClass::Infrastructure => Level::ERROR,
            ErrorClass::Unauthorized => Level::WARN,
            ErrorClass::NotFound | ErrorClass::Conflict | ErrorClass::Validation => Level::DEBUG,
        }
    }

    fn log(&self) {
        let operation = match self {
            IdentityError::Database { operation, .. } => Some(*operation),
            _ => None,
        };
        match self.log_level() {
            Level::ERROR => tracing::error!(operation, error = %self, "Identity request failed"),
            Level::WARN => tracing::warn!(error = %self, "Identity request rejected"),
            _ => tracing::debug!(error = %self, "Identity request rejected"),
        }
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for IdentityError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => IdentityError::Validation(err.message().to_string()),
            _ => IdentityError::Internal(err.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for IdentityError {
    fn from(err: tokio::task::JoinError) -> Self {
        IdentityError::Internal(format!("Background task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (IdentityError::UserNotFound, StatusCode::NOT_FOUND),
            (IdentityError::DuplicateCredential, StatusCode::CONFLICT),
            (IdentityError::InvalidCredential, StatusCode::UNAUTHORIZED),
            (IdentityError::InvalidToken, StatusCode::UNAUTHORIZED),
            (
                IdentityError::Validation("email is required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                IdentityError::database("users.insert", sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                IdentityError::database("users.insert", sqlx::Error::PoolTimedOut),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{error:?}");
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_server_errors_are_not_leaked() {
        let err = IdentityError::database("users.find_by_email", sqlx::Error::PoolTimedOut);
        assert!(err.to_string().contains("users.find_by_email"));
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }

    #[test]
    fn test_log_level_follows_error_class() {
        let cases = [
            (IdentityError::database("users.insert", sqlx::Error::PoolTimedOut), Level::ERROR),
            (IdentityError::Internal("join".into()), Level::ERROR),
            (IdentityError::InvalidCredential, Level::WARN),
            (IdentityError::InvalidToken, Level::WARN),
            (IdentityError::UserNotFound, Level::DEBUG),
            (IdentityError::DuplicateCredential, Level::DEBUG),
        ];

        for (error, expected) in cases {
            assert_eq!(error.log_level(), expected, "{error:?}");
        }
    }

    #[test]
    fn test_validation_from_app_error() {
        let err: IdentityError = AppError::bad_request("Email cannot be empty").into();
        assert!(matches!(err, IdentityError::Validation(ref m) if m == "Email cannot be empty"));
    }
}
