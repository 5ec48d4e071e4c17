//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::unique_violation;
use kernel::id::{BookId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{book::Book, exchange_request::ExchangeRequest};
use crate::domain::repository::{BookRepository, ExchangeRequestRepository};
use crate::domain::value_object::book_filter::{BookFilter, like_pattern};
use crate::error::{ExchangeError, ExchangeResult};

const UNIQUE_LENDER_TITLE: &str = "unique_lender_title";
const UNIQUE_REQUESTER_BOOK: &str = "unique_requester_book";

/// PostgreSQL-backed exchange repository
#[derive(Clone)]
pub struct PgExchangeRepository {
    pool: PgPool,
}

impl PgExchangeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Book Repository Implementation
// ============================================================================

impl BookRepository for PgExchangeRepository {
    async fn create(&self, book: &Book) -> ExchangeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO books (
                book_id,
                title,
                author,
                genre,
                lender_id,
                availability_status,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(book.book_id.as_uuid())
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.lender_id.as_uuid())
        .bind(book.availability_status)
        .bind(book.created_at)
        .execute(&self.pool)
        .await
        .map_err(book_insert_error)?;

        Ok(())
    }

    async fn find_by_id(&self, book_id: &BookId) -> ExchangeResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                book_id,
                title,
                author,
                genre,
                lender_id,
                availability_status,
                created_at
            FROM books
            WHERE book_id = $1
            "#,
        )
        .bind(book_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ExchangeError::database("books.find_by_id", e))?;

        Ok(row.map(BookRow::into_book))
    }

    async fn exists_by_lender_and_title(
        &self,
        lender_id: &UserId,
        title: &str,
    ) -> ExchangeResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM books WHERE lender_id = $1 AND title = $2)",
        )
        .bind(lender_id.as_uuid())
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ExchangeError::database("books.exists", e))?;

        Ok(exists)
    }

    async fn find_available(
        &self,
        viewer_id: &UserId,
        filter: &BookFilter,
    ) -> ExchangeResult<Vec<Book>> {
        // A NULL pattern disables its predicate
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                book_id,
                title,
                author,
                genre,
                lender_id,
                availability_status,
                created_at
            FROM books
            WHERE lender_id <> $1
              AND availability_status = TRUE
              AND ($2::text IS NULL OR genre ILIKE $2 ESCAPE '\')
              AND ($3::text IS NULL OR title ILIKE $3 ESCAPE '\')
              AND ($4::text IS NULL OR author ILIKE $4 ESCAPE '\')
            ORDER BY created_at, book_id
            "#,
        )
        .bind(viewer_id.as_uuid())
        .bind(filter.genre.as_deref().map(like_pattern))
        .bind(filter.title.as_deref().map(like_pattern))
        .bind(filter.author.as_deref().map(like_pattern))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ExchangeError::database("books.find_available", e))?;

        Ok(rows.into_iter().map(BookRow::into_book).collect())
    }

    async fn find_by_lender(&self, lender_id: &UserId) -> ExchangeResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                book_id,
                title,
                author,
                genre,
                lender_id,
                availability_status,
                created_at
            FROM books
            WHERE lender_id = $1
            ORDER BY created_at, book_id
            "#,
        )
        .bind(lender_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ExchangeError::database("books.find_by_lender", e))?;

        Ok(rows.into_iter().map(BookRow::into_book).collect())
    }
}

// ============================================================================
// Exchange Request Repository Implementation
// ============================================================================

impl ExchangeRequestRepository for PgExchangeRepository {
    async fn create(&self, request: &ExchangeRequest) -> ExchangeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO exchange_requests (
                exchange_request_id,
                lender_id,
                requester_id,
                book_id,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(request.exchange_request_id.as_uuid())
        .bind(request.lender_id.as_uuid())
        .bind(request.requester_id.as_uuid())
        .bind(request.book_id.as_uuid())
        .bind(request.created_at)
        .execute(&self.pool)
        .await
        .map_err(request_insert_error)?;

        Ok(())
    }

    async fn exists_by_requester_and_book(
        &self,
        requester_id: &UserId,
        book_id: &BookId,
    ) -> ExchangeResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM exchange_requests WHERE requester_id = $1 AND book_id = $2)",
        )
        .bind(requester_id.as_uuid())
        .bind(book_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ExchangeError::database("exchange_requests.exists", e))?;

        Ok(exists)
    }

    async fn find_books_requested_by(&self, requester_id: &UserId) -> ExchangeResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                b.book_id,
                b.title,
                b.author,
                b.genre,
                b.lender_id,
                b.availability_status,
                b.created_at
            FROM exchange_requests er
            JOIN books b ON b.book_id = er.book_id
            WHERE er.requester_id = $1
            ORDER BY er.created_at, er.exchange_request_id
            "#,
        )
        .bind(requester_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ExchangeError::database("exchange_requests.find_sent", e))?;

        Ok(rows.into_iter().map(BookRow::into_book).collect())
    }

    async fn find_books_requested_from(&self, lender_id: &UserId) -> ExchangeResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                b.book_id,
                b.title,
                b.author,
                b.genre,
                b.lender_id,
                b.availability_status,
                b.created_at
            FROM exchange_requests er
            JOIN books b ON b.book_id = er.book_id
            WHERE er.lender_id = $1
            ORDER BY er.created_at, er.exchange_request_id
            "#,
        )
        .bind(lender_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ExchangeError::database("exchange_requests.find_received", e))?;

        Ok(rows.into_iter().map(BookRow::into_book).collect())
    }
}

fn book_insert_error(err: sqlx::Error) -> ExchangeError {
    match unique_violation(&err) {
        Some(UNIQUE_LENDER_TITLE) => ExchangeError::DuplicateBook,
        _ => ExchangeError::database("books.insert", err),
    }
}

fn request_insert_error(err: sqlx::Error) -> ExchangeError {
    match unique_violation(&err) {
        Some(UNIQUE_REQUESTER_BOOK) => ExchangeError::DuplicateRequest,
        _ => ExchangeError::database("exchange_requests.insert", err),
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct BookRow {
    book_id: Uuid,
    title: String,
    author: String,
    genre: String,
    lender_id: Uuid,
    availability_status: bool,
    created_at: DateTime<Utc>,
}

impl BookRow {
    fn into_book(self) -> Book {
        Book {
            book_id: BookId::from_uuid(self.book_id),
            title: self.title,
            author: self.author,
            genre: self.genre,
            lender_id: UserId::from_uuid(self.lender_id),
            availability_status: self.availability_status,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use kernel::testing::StubDatabaseError;

    use super::*;

    #[test]
    fn test_lender_title_violation_is_duplicate_book() {
        let err = book_insert_error(StubDatabaseError::unique(UNIQUE_LENDER_TITLE));
        assert!(matches!(err, ExchangeError::DuplicateBook));
    }

    #[test]
    fn test_requester_book_violation_is_duplicate_request() {
        let err = request_insert_error(StubDatabaseError::unique(UNIQUE_REQUESTER_BOOK));
        assert!(matches!(err, ExchangeError::DuplicateRequest));
    }

    #[test]
    fn test_unknown_unique_constraint_stays_database_error() {
        let err = book_insert_error(StubDatabaseError::unique("books_pkey"));
        assert!(matches!(err, ExchangeError::Database { operation: "books.insert", .. }));

        // Each insert only claims its own constraint
        let err = request_insert_error(StubDatabaseError::unique(UNIQUE_LENDER_TITLE));
        assert!(matches!(
            err,
            ExchangeError::Database { operation: "exchange_requests.insert", .. }
        ));
    }

    #[test]
    fn test_check_violation_stays_database_error() {
        let err = request_insert_error(
            StubDatabaseError::new("23514", Some("no_self_request")).into(),
        );
        assert!(matches!(
            err,
            ExchangeError::Database { operation: "exchange_requests.insert", .. }
        ));
        assert_eq!(err.status_code(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
