//! Infrastructure Layer
//!
//! Database implementations of the book catalog and request store.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryExchangeRepository;
pub use postgres::PgExchangeRepository;
