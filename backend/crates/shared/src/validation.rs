//! Input Validation
//!
//! Cross-cutting rules for free-text fields supplied by clients
//! (user names, book titles, search filters).

use thiserror::Error;

use crate::error::app_error::AppError;

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field absent or blank after trimming
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// Field longer than allowed (counted in characters)
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Field contains control characters
    #[error("{field} contains invalid characters")]
    InvalidCharacter { field: &'static str },
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Missing { field }
            | FieldError::TooLong { field, .. }
            | FieldError::InvalidCharacter { field } => field,
        }
    }
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        let action = format!("Please check the {} field", err.field());
        AppError::bad_request(err.to_string()).with_action(action)
    }
}

/// Trim `value` and require it to be non-empty.
pub fn required(field: &'static str, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Missing { field });
    }
    Ok(trimmed.to_string())
}

/// [`required`] plus a character limit and a control-character ban.
pub fn required_text(field: &'static str, value: &str, max: usize) -> Result<String, FieldError> {
    let trimmed = required(field, value)?;

    if trimmed.chars().count() > max {
        return Err(FieldError::TooLong { field, max });
    }
    if trimmed.chars().any(char::is_control) {
        return Err(FieldError::InvalidCharacter { field });
    }

    Ok(trimmed)
}

/// Normalise an optional filter: blank means "no restriction".
pub fn optional_filter(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
