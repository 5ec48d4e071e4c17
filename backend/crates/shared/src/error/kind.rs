//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes, and the
//! coarser [`ErrorClass`] taxonomy used for logging and recovery decisions.

use serde::Serialize;

/// エラー種別の列挙体
///
/// HTTP ステータスコードに対応するエラー分類を定義します。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Conflict;
/// assert_eq!(kind.status_code(), 409);
/// assert_eq!(kind.as_str(), "Conflict");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: 入力が不正
    BadRequest,
    /// 401 - Unauthorized: 認証情報またはトークンが無効
    Unauthorized,
    /// 403 - Forbidden: 他ユーザーとしての操作
    Forbidden,
    /// 404 - Not Found: ユーザー・書籍が見つからない
    NotFound,
    /// 409 - Conflict: 一意制約・所有権の違反
    Conflict,
    /// 500 - Internal Server Error
    InternalServerError,
    /// 503 - Service Unavailable: ストレージ利用不可
    ServiceUnavailable,
}

/// Coarse error taxonomy shared by every crate.
///
/// Only [`ErrorClass::Infrastructure`] may surface as a generic failure;
/// everything else is a typed domain outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorClass {
    NotFound,
    Conflict,
    Unauthorized,
    Validation,
    Infrastructure,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    /// assert_eq!(ErrorKind::NotFound.status_code(), 404);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// HTTP ステータスの標準的な理由フレーズ
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Map this kind onto the shared taxonomy.
    ///
    /// Forbidden is an authorization failure and therefore lands in
    /// [`ErrorClass::Unauthorized`].
    #[inline]
    pub const fn class(&self) -> ErrorClass {
        match self {
            ErrorKind::BadRequest => ErrorClass::Validation,
            ErrorKind::Unauthorized | ErrorKind::Forbidden => ErrorClass::Unauthorized,
            ErrorKind::NotFound => ErrorClass::NotFound,
            ErrorKind::Conflict => ErrorClass::Conflict,
            ErrorKind::InternalServerError | ErrorKind::ServiceUnavailable => {
                ErrorClass::Infrastructure
            }
        }
    }

    /// サーバー側のエラーかどうか（5xx はログに記録すべき）
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::Forbidden.status_code(), 403);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
        assert_eq!(ErrorKind::ServiceUnavailable.status_code(), 503);
    }

    #[test]
    fn test_class_mapping() {
        assert_eq!(ErrorKind::NotFound.class(), ErrorClass::NotFound);
        assert_eq!(ErrorKind::Conflict.class(), ErrorClass::Conflict);
        assert_eq!(ErrorKind::Unauthorized.class(), ErrorClass::Unauthorized);
        assert_eq!(ErrorKind::Forbidden.class(), ErrorClass::Unauthorized);
        assert_eq!(ErrorKind::BadRequest.class(), ErrorClass::Validation);
        assert_eq!(
            ErrorKind::ServiceUnavailable.class(),
            ErrorClass::Infrastructure
        );
    }

    #[test]
    fn test_server_errors() {
        assert!(!ErrorKind::Conflict.is_server_error());
        assert!(!ErrorKind::Forbidden.is_server_error());
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(ErrorKind::ServiceUnavailable.is_server_error());
    }
}
