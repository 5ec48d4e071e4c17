//! User Name Value Object
//!
//! ユーザー名は公開識別子（ハンドル）。URL パスにも現れるため、
//! パス区切りや空白を含めない。
//!
//! ## 不変条件
//! - NFKC 正規化・前後の空白除去の後で 1〜64 文字
//! - 空白・制御文字・`/` を含まない
//! - 大文字小文字は保持し、比較は完全一致

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use kernel::validation;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

const FIELD: &str = "userName";

/// Validated user name
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let value = validation::required_text(FIELD, &normalized, USER_NAME_MAX_LENGTH)?;

        if value.chars().any(char::is_whitespace) {
            return Err(AppError::bad_request("User name cannot contain spaces")
                .with_action("Please remove spaces from the user name"));
        }
        if value.contains('/') {
            return Err(AppError::bad_request("User name cannot contain '/'"));
        }

        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(UserName::new("alice").unwrap().as_str(), "alice");
        assert_eq!(UserName::new("  bob_42 ").unwrap().as_str(), "bob_42");
        assert_eq!(UserName::new("Alice").unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_nfkc_normalization() {
        // Fullwidth letters fold to ASCII
        assert_eq!(UserName::new("ａｌｉｃｅ").unwrap().as_str(), "alice");
    }

    #[test]
    fn test_invalid_names() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
        assert!(UserName::new("al ice").is_err());
        assert!(UserName::new("al/ice").is_err());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(UserName::new("alice").unwrap().to_string(), "alice");
    }
}
