//! Add Book Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::domain::value_object::new_book::NewBook;
use crate::error::{ExchangeError, ExchangeResult};

/// Add book input
pub struct AddBookInput {
    pub title: String,
    pub author: String,
    pub genre: String,
}

/// Add book use case
pub struct AddBookUseCase<B>
where
    B: BookRepository,
{
    book_repo: Arc<B>,
}

impl<B> AddBookUseCase<B>
where
    B: BookRepository,
{
    pub fn new(book_repo: Arc<B>) -> Self {
        Self { book_repo }
    }

    pub async fn execute(&self, lender_id: UserId, input: AddBookInput) -> ExchangeResult<Book> {
        let details = NewBook::new(&input.title, &input.author, &input.genre)?;

        if self
            .book_repo
            .exists_by_lender_and_title(&lender_id, &details.title)
            .await?
        {
            return Err(ExchangeError::DuplicateBook);
        }

        let book = Book::new(lender_id, details);
        self.book_repo.create(&book).await?;

        tracing::info!(
            book_id = %book.book_id,
            lender_id = %lender_id,
            "Book added"
        );

        Ok(book)
    }
}
