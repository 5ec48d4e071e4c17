//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::application::{
    AuthenticateInput, AuthenticateUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::IdentityResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserInfo, UserInfoResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for identity handlers
#[derive(Clone)]
pub struct IdentityAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<IdentityConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<IdentityAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> IdentityResult<(StatusCode, Json<RegisterResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        user_name: req.user_name,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: output.user_id,
            user_name: output.user_name,
            email: output.email,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<IdentityAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> IdentityResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    let input = AuthenticateInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        token_type: "Bearer",
        expires_at: output.expires_at,
    }))
}

// ============================================================================
// User Info (requires bearer token)
// ============================================================================

/// GET /userinfo
pub async fn user_info(CurrentUser(user): CurrentUser) -> Json<UserInfoResponse> {
    Json(UserInfoResponse {
        message: "This is a protected route",
        user: UserInfo {
            user_id: user.user_id,
            user_name: user.user_name,
        },
    })
}
