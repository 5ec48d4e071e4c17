//! Identity Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgIdentityRepository;
use crate::presentation::handlers::{self, IdentityAppState};
use crate::presentation::middleware::require_bearer_token;

/// Create the Identity router with PostgreSQL repository
pub fn identity_router(repo: PgIdentityRepository, config: Arc<IdentityConfig>) -> Router {
    identity_router_generic(repo, config)
}

/// Create a generic Identity router for any repository implementation
pub fn identity_router_generic<R>(repo: R, config: Arc<IdentityConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = IdentityAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };

    // route_layer only wraps the routes registered before it
    Router::new()
        .route("/userinfo", get(handlers::user_info))
        .route_layer(from_fn_with_state(config, require_bearer_token))
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
