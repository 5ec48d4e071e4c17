//! Exchange Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use identity::{IdentityConfig, PgIdentityRepository, UserRepository, require_bearer_token};
use std::sync::Arc;

use crate::domain::repository::{BookRepository, ExchangeRequestRepository};
use crate::infra::postgres::PgExchangeRepository;
use crate::presentation::handlers::{self, ExchangeAppState};

/// Create the Exchange router with PostgreSQL repositories
pub fn exchange_router(
    repo: PgExchangeRepository,
    users: PgIdentityRepository,
    config: Arc<IdentityConfig>,
) -> Router {
    exchange_router_generic(repo, users, config)
}

/// Create a generic Exchange router for any repository implementation
///
/// Every route sits behind the bearer guard.
pub fn exchange_router_generic<R, U>(repo: R, users: U, config: Arc<IdentityConfig>) -> Router
where
    R: BookRepository + ExchangeRequestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ExchangeAppState {
        repo: Arc::new(repo),
        users: Arc::new(users),
    };

    Router::new()
        .route(
            "/users/{user_name}/available-books",
            get(handlers::available_books::<R, U>),
        )
        .route("/users/{user_name}/add-book", post(handlers::add_book::<R, U>))
        .route(
            "/users/{user_name}/added-books",
            get(handlers::added_books::<R, U>),
        )
        .route(
            "/users/{user_name}/create-exchange-request",
            post(handlers::create_exchange_request::<R, U>),
        )
        .route(
            "/users/{user_name}/sent-requests",
            get(handlers::sent_requests::<R, U>),
        )
        .route(
            "/users/{user_name}/received-requests",
            get(handlers::received_requests::<R, U>),
        )
        .route_layer(from_fn_with_state(config, require_bearer_token))
        .with_state(state)
}
