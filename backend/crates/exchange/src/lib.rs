//! Exchange Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Book and exchange request entities, filters, repository traits
//! - `application/` - One use case per operation, plus path-user authorization
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Lenders list books; everyone else browses available ones with filters
//! - Requesters ask to borrow a book; lenders see what was asked of them
//!
//! ## Guarantees
//! - One book title per lender, one request per (requester, book)
//! - A request names the book's actual lender, and never the requester
//! - All routes act only for the user the bearer token was issued to

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ExchangeError, ExchangeResult};
pub use infra::{memory::InMemoryExchangeRepository, postgres::PgExchangeRepository};
pub use presentation::router::{exchange_router, exchange_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
