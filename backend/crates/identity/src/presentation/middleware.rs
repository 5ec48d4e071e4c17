//! Bearer Token Middleware
//!
//! Guards routes that act on behalf of a user. The verified identity is
//! stored in request extensions and read back with [`CurrentUser`].

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

use crate::application::VerifyTokenUseCase;
use crate::application::config::IdentityConfig;
use crate::domain::value_object::session::AuthenticatedUser;
use crate::error::IdentityError;

/// Middleware that requires `Authorization: Bearer <token>`
///
/// Register with `axum::middleware::from_fn_with_state(config, require_bearer_token)`.
pub async fn require_bearer_token(
    State(config): State<Arc<IdentityConfig>>,
    mut req: Request,
    next: Next,
) -> Result<Response, IdentityError> {
    let Some(Authorization(bearer)) = req.headers().typed_get::<Authorization<Bearer>>() else {
        tracing::debug!(path = %req.uri().path(), "Missing bearer token");
        return Err(IdentityError::InvalidToken);
    };

    let user = VerifyTokenUseCase::new(config).execute(bearer.token())?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Extractor for the identity verified by [`require_bearer_token`]
///
/// Rejects with 401 when the route is not behind the guard.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = IdentityError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or(IdentityError::InvalidToken)
    }
}
