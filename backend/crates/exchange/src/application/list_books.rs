//! Book Listing Use Cases

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::domain::value_object::book_filter::BookFilter;
use crate::error::ExchangeResult;

/// Books a viewer could borrow
pub struct ListAvailableBooksUseCase<B>
where
    B: BookRepository,
{
    book_repo: Arc<B>,
}

impl<B> ListAvailableBooksUseCase<B>
where
    B: BookRepository,
{
    pub fn new(book_repo: Arc<B>) -> Self {
        Self { book_repo }
    }

    /// Never returns the viewer's own books or unavailable ones
    pub async fn execute(&self, viewer_id: UserId, filter: BookFilter) -> ExchangeResult<Vec<Book>> {
        let books = self.book_repo.find_available(&viewer_id, &filter).await?;

        tracing::debug!(
            viewer_id = %viewer_id,
            filtered = !filter.is_empty(),
            count = books.len(),
            "Listed available books"
        );

        Ok(books)
    }
}

/// A lender's own listings, including unavailable ones
pub struct ListOwnBooksUseCase<B>
where
    B: BookRepository,
{
    book_repo: Arc<B>,
}

impl<B> ListOwnBooksUseCase<B>
where
    B: BookRepository,
{
    pub fn new(book_repo: Arc<B>) -> Self {
        Self { book_repo }
    }

    pub async fn execute(&self, lender_id: UserId) -> ExchangeResult<Vec<Book>> {
        self.book_repo.find_by_lender(&lender_id).await
    }
}
