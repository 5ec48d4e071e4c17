//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{BookId, UserId};

use crate::domain::entity::{book::Book, exchange_request::ExchangeRequest};
use crate::domain::value_object::book_filter::BookFilter;
use crate::error::ExchangeResult;

/// Book catalog
///
/// `create` must reject a second book with the same `(lender_id, title)`
/// with `ExchangeError::DuplicateBook` atomically. Lists are ordered by
/// `created_at`, then id.
#[trait_variant::make(BookRepository: Send)]
pub trait LocalBookRepository {
    /// Insert a new book
    async fn create(&self, book: &Book) -> ExchangeResult<()>;

    /// Find book by ID
    async fn find_by_id(&self, book_id: &BookId) -> ExchangeResult<Option<Book>>;

    /// Fast-path duplicate check
    async fn exists_by_lender_and_title(
        &self,
        lender_id: &UserId,
        title: &str,
    ) -> ExchangeResult<bool>;

    /// Available books not lent by `viewer_id`, narrowed by `filter`
    async fn find_available(
        &self,
        viewer_id: &UserId,
        filter: &BookFilter,
    ) -> ExchangeResult<Vec<Book>>;

    /// All books of a lender, available or not
    async fn find_by_lender(&self, lender_id: &UserId) -> ExchangeResult<Vec<Book>>;
}

/// Exchange request store
///
/// `create` must reject a second request for the same
/// `(requester_id, book_id)` with `ExchangeError::DuplicateRequest`
/// atomically.
#[trait_variant::make(ExchangeRequestRepository: Send)]
pub trait LocalExchangeRequestRepository {
    /// Insert a new request
    async fn create(&self, request: &ExchangeRequest) -> ExchangeResult<()>;

    /// Fast-path duplicate check
    async fn exists_by_requester_and_book(
        &self,
        requester_id: &UserId,
        book_id: &BookId,
    ) -> ExchangeResult<bool>;

    /// Books behind the requests sent by `requester_id`
    async fn find_books_requested_by(&self, requester_id: &UserId)
    -> ExchangeResult<Vec<Book>>;

    /// Books behind the requests addressed to `lender_id`
    async fn find_books_requested_from(&self, lender_id: &UserId) -> ExchangeResult<Vec<Book>>;
}
