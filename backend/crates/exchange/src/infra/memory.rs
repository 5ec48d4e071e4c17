//! In-Memory Repository
//!
//! Books and requests behind one lock. Uniqueness is checked and the row
//! inserted under the same write guard, so concurrent duplicates lose the
//! same way they do against the PostgreSQL constraints.

use std::sync::Arc;

use kernel::id::{BookId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::{book::Book, exchange_request::ExchangeRequest};
use crate::domain::repository::{BookRepository, ExchangeRequestRepository};
use crate::domain::value_object::book_filter::BookFilter;
use crate::error::{ExchangeError, ExchangeResult};

#[derive(Default)]
struct Tables {
    books: Vec<Book>,
    requests: Vec<ExchangeRequest>,
}

impl Tables {
    fn book(&self, book_id: &BookId) -> Option<&Book> {
        self.books.iter().find(|b| &b.book_id == book_id)
    }

    fn books_for<'a>(&'a self, requests: impl Iterator<Item = &'a ExchangeRequest>) -> Vec<Book> {
        requests
            .filter_map(|r| self.book(&r.book_id).cloned())
            .collect()
    }
}

#[derive(Clone, Default)]
pub struct InMemoryExchangeRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryExchangeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn request_count(&self) -> usize {
        self.tables.read().await.requests.len()
    }

    pub async fn book_count(&self) -> usize {
        self.tables.read().await.books.len()
    }

    /// Flip a book's availability (no HTTP route does this)
    pub async fn set_availability(&self, book_id: &BookId, available: bool) -> bool {
        let mut tables = self.tables.write().await;
        match tables.books.iter_mut().find(|b| &b.book_id == book_id) {
            Some(book) => {
                book.availability_status = available;
                true
            }
            None => false,
        }
    }
}

impl BookRepository for InMemoryExchangeRepository {
    async fn create(&self, book: &Book) -> ExchangeResult<()> {
        let mut tables = self.tables.write().await;
        if tables
            .books
            .iter()
            .any(|b| b.lender_id == book.lender_id && b.title == book.title)
        {
            return Err(ExchangeError::DuplicateBook);
        }
        tables.books.push(book.clone());
        Ok(())
    }

    async fn find_by_id(&self, book_id: &BookId) -> ExchangeResult<Option<Book>> {
        Ok(self.tables.read().await.book(book_id).cloned())
    }

    async fn exists_by_lender_and_title(
        &self,
        lender_id: &UserId,
        title: &str,
    ) -> ExchangeResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .books
            .iter()
            .any(|b| &b.lender_id == lender_id && b.title == title))
    }

    async fn find_available(
        &self,
        viewer_id: &UserId,
        filter: &BookFilter,
    ) -> ExchangeResult<Vec<Book>> {
        let tables = self.tables.read().await;
        Ok(tables
            .books
            .iter()
            .filter(|b| !b.is_lent_by(viewer_id) && b.availability_status && filter.matches(b))
            .cloned()
            .collect())
    }

    async fn find_by_lender(&self, lender_id: &UserId) -> ExchangeResult<Vec<Book>> {
        let tables = self.tables.read().await;
        Ok(tables
            .books
            .iter()
            .filter(|b| b.is_lent_by(lender_id))
            .cloned()
            .collect())
    }
}

impl ExchangeRequestRepository for InMemoryExchangeRepository {
    async fn create(&self, request: &ExchangeRequest) -> ExchangeResult<()> {
        let mut tables = self.tables.write().await;
        if tables
            .requests
            .iter()
            .any(|r| r.requester_id == request.requester_id && r.book_id == request.book_id)
        {
            return Err(ExchangeError::DuplicateRequest);
        }
        tables.requests.push(request.clone());
        Ok(())
    }

    async fn exists_by_requester_and_book(
        &self,
        requester_id: &UserId,
        book_id: &BookId,
    ) -> ExchangeResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .requests
            .iter()
            .any(|r| &r.requester_id == requester_id && &r.book_id == book_id))
    }

    async fn find_books_requested_by(&self, requester_id: &UserId) -> ExchangeResult<Vec<Book>> {
        let tables = self.tables.read().await;
        Ok(tables.books_for(
            tables
                .requests
                .iter()
                .filter(|r| &r.requester_id == requester_id),
        ))
    }

    async fn find_books_requested_from(&self, lender_id: &UserId) -> ExchangeResult<Vec<Book>> {
        let tables = self.tables.read().await;
        Ok(tables.books_for(tables.requests.iter().filter(|r| &r.lender_id == lender_id)))
    }
}
