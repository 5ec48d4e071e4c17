//! Error conversions
//!
//! HTTP rendering for [`AppError`], plus a helper for recognising storage
//! constraint violations.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// SQLx helpers (feature-gated)
// ============================================================================

/// PostgreSQL `unique_violation`
#[cfg(feature = "sqlx")]
pub const PG_UNIQUE_VIOLATION: &str = "23505";

/// Returns the violated constraint name when `err` is a unique violation.
///
/// Repositories use this to translate a lost check-then-insert race into
/// the matching domain error instead of a generic storage failure.
#[cfg(feature = "sqlx")]
pub fn unique_violation(err: &sqlx::Error) -> Option<&str> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    match db_err.code() {
        Some(code) if code == PG_UNIQUE_VIOLATION => Some(db_err.constraint().unwrap_or("")),
        _ => None,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}


#[cfg(all(test, feature = "axum"))]
mod response_tests {
    use axum::response::IntoResponse;

    use super::*;

    #[test]
    fn test_problem_details_status() {
        let response = AppError::bad_request("Title cannot be empty").into_response();
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
