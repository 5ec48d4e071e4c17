//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{book::Book, exchange_request::ExchangeRequest};
pub use repository::{BookRepository, ExchangeRequestRepository};
pub use value_object::{book_filter::BookFilter, new_book::NewBook};
