//! Test helpers shared by the domain crates.
//!
//! Enabled with the `test-support` feature.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use sqlx::error::{DatabaseError, ErrorKind};

/// A database error with a fixed SQLSTATE and constraint name, standing in
/// for what the Postgres driver reports on a failed insert.
#[derive(Debug)]
pub struct StubDatabaseError {
    code: &'static str,
    constraint: Option<&'static str>,
}

impl StubDatabaseError {
    pub fn new(code: &'static str, constraint: Option<&'static str>) -> Self {
        Self { code, constraint }
    }

    /// SQLSTATE 23505 on the given constraint
    pub fn unique(constraint: &'static str) -> sqlx::Error {
        Self::new("23505", Some(constraint)).into()
    }
}

// `From<StubDatabaseError> for sqlx::Error` comes from sqlx's blanket
// `impl<E: DatabaseError> From<E> for sqlx::Error`.

impl fmt::Display for StubDatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stub database error {}", self.code)
    }
}

impl StdError for StubDatabaseError {}

impl DatabaseError for StubDatabaseError {
    fn message(&self) -> &str {
        "stub database error"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.code))
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn constraint(&self) -> Option<&str> {
        self.constraint
    }

    fn kind(&self) -> ErrorKind {
        match self.code {
            "23505" => ErrorKind::UniqueViolation,
            "23503" => ErrorKind::ForeignKeyViolation,
            "23502" => ErrorKind::NotNullViolation,
            "23514" => ErrorKind::CheckViolation,
            _ => ErrorKind::Other,
        }
    }
}
