//! Exchange Error Types
//!
//! Exchange-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use identity::IdentityError;
use kernel::error::{
    app_error::AppError,
    kind::{ErrorClass, ErrorKind},
};
use thiserror::Error;
use tracing::Level;

/// Exchange-specific result type alias
pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// Exchange-specific error variants
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// User named in the path does not exist
    #[error("User not found")]
    UserNotFound,

    /// Path user differs from the verified token subject
    #[error("Token does not belong to this user")]
    Forbidden,

    /// Book absent, or not owned by the supplied lender
    #[error("Book not found or not owned by the lender")]
    BookNotFoundOrNotOwned,

    /// Lender already listed a book with this title
    #[error("A book with this title has already been added")]
    DuplicateBook,

    /// Requester already asked for this book
    #[error("Exchange request already exists")]
    DuplicateRequest,

    /// Requester and lender are the same user
    #[error("Cannot request your own book")]
    SelfRequestNotAllowed,

    /// Malformed input field
    #[error("{0}")]
    Validation(String),

    /// Failure raised by the identity layer (token or user lookup)
    #[error(transparent)]
    Identity(IdentityError),

    /// Storage failure, tagged with the operation that hit it
    #[error("Database error during {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ExchangeError {
    /// Wrap a storage error with the operation name used in logs
    pub fn database(operation: &'static str, source: sqlx::Error) -> Self {
        ExchangeError::Database { operation, source }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExchangeError::UserNotFound | ExchangeError::BookNotFoundOrNotOwned => {
                ErrorKind::NotFound
            }
            ExchangeError::Forbidden => ErrorKind::Forbidden,
            ExchangeError::DuplicateBook
            | ExchangeError::DuplicateRequest
            | ExchangeError::SelfRequestNotAllowed => ErrorKind::Conflict,
            ExchangeError::Validation(_) => ErrorKind::BadRequest,
            ExchangeError::Identity(inner) => inner.kind(),
            ExchangeError::Database {
                source: sqlx::Error::PoolTimedOut | sqlx::Error::Io(_),
                ..
            } => ErrorKind::ServiceUnavailable,
            ExchangeError::Database { .. } | ExchangeError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        if let ExchangeError::Identity(inner) = self {
            return inner.to_app_error();
        }

        let kind = self.kind();
        if kind.is_server_error() {
            return AppError::new(kind, "Internal server error");
        }

        let err = AppError::new(kind, self.to_string());
        match self {
            ExchangeError::Forbidden => {
                err.with_action("Use the user name the token was issued for")
            }
            ExchangeError::BookNotFoundOrNotOwned => {
                err.with_action("Check the lenderId and bookId pair")
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
            ExchangeError::Database { operation, .. } => Some(*operation),
            _ => None,
        };
        match self.log_level() {
            Level::ERROR => tracing::error!(operation, error = %self, "Exchange request failed"),
            Level::WARN => tracing::warn!(error = %self, "Exchange request rejected"),
            _ => tracing::debug!(error = %self, "Exchange request rejected"),
        }
    }
}

impl IntoResponse for ExchangeError {
    fn into_response(self) -> Response {
        if let ExchangeError::Identity(inner) = self {
            return inner.into_response();
        }
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ExchangeError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => ExchangeError::Validation(err.message().to_string()),
            _ => ExchangeError::Internal(err.to_string()),
        }
    }
}

impl From<IdentityError> for ExchangeError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::UserNotFound => ExchangeError::UserNotFound,
            other => ExchangeError::Identity(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ExchangeError::UserNotFound, StatusCode::NOT_FOUND),
            (ExchangeError::Forbidden, StatusCode::FORBIDDEN),
            (ExchangeError::BookNotFoundOrNotOwned, StatusCode::NOT_FOUND),
            (ExchangeError::DuplicateBook, StatusCode::CONFLICT),
            (ExchangeError::DuplicateRequest, StatusCode::CONFLICT),
            (ExchangeError::SelfRequestNotAllowed, StatusCode::CONFLICT),
            (
                ExchangeError::Validation("title is required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ExchangeError::Identity(IdentityError::InvalidToken),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ExchangeError::database("books.insert", sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{error:?}");
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_domain_errors_classify() {
        assert_eq!(ExchangeError::DuplicateRequest.kind().class(), ErrorClass::Conflict);
        assert_eq!(
            ExchangeError::BookNotFoundOrNotOwned.kind().class(),
            ErrorClass::NotFound
        );
        assert_eq!(
            ExchangeError::Validation("x".into()).kind().class(),
            ErrorClass::Validation
        );
    }

    #[test]
    fn test_log_level_follows_error_class() {
        let cases = [
            (ExchangeError::database("books.insert", sqlx::Error::RowNotFound), Level::ERROR),
            (ExchangeError::Forbidden, Level::WARN),
            (ExchangeError::DuplicateRequest, Level::DEBUG),
            (ExchangeError::BookNotFoundOrNotOwned, Level::DEBUG),
            (ExchangeError::Validation("x".into()), Level::DEBUG),
        ];

        for (error, expected) in cases {
            assert_eq!(error.log_level(), expected, "{error:?}");
        }
    }

    #[test]
    fn test_identity_user_not_found_is_lifted() {
        let err: ExchangeError = IdentityError::UserNotFound.into();
        assert!(matches!(err, ExchangeError::UserNotFound));

        let err: ExchangeError = IdentityError::InvalidToken.into();
        assert!(matches!(err, ExchangeError::Identity(IdentityError::InvalidToken)));
    }

    #[test]
    fn test_storage_detail_not_exposed() {
        let err = ExchangeError::database("exchange_requests.insert", sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }
}
