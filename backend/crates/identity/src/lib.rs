//! Identity Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL and in-memory credential stores
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Registration with user name, email and password
//! - Login by email issuing a signed, stateless bearer token (1 hour)
//! - Bearer guard middleware for routes acting on behalf of a user
//! - User name to user id resolution for path-addressed resources
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (m=19456 KiB, t=2, p=1), optional pepper
//! - Tokens are HMAC-SHA256 signed claims; no server-side session state
//! - Token failures are indistinguishable to the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::IdentityConfig;
pub use application::{ResolveUserIdUseCase, VerifyTokenUseCase};
pub use domain::{AuthenticatedUser, UserRepository};
pub use error::{IdentityError, IdentityResult};
pub use infra::{memory::InMemoryIdentityRepository, postgres::PgIdentityRepository};
pub use presentation::middleware::{CurrentUser, require_bearer_token};
pub use presentation::router::{identity_router, identity_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
