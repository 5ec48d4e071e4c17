//! API DTOs (Data Transfer Objects)
//!
//! Request fields default to empty so that an omitted field reaches the
//! domain validation (400) instead of failing JSON extraction.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default, alias = "username")]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Always "Bearer"
    pub token_type: &'static str,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// User Info
// ============================================================================

/// Verified identity as returned to the client
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: UserId,
    pub user_name: String,
}

/// User info response
#[derive(Debug, Clone, Serialize)]
pub struct UserInfoResponse {
    pub message: &'static str,
    pub user: UserInfo,
}
