//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{BookId, ExchangeRequestId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{book::Book, exchange_request::ExchangeRequest};

// ============================================================================
// Books
// ============================================================================

/// `?genre=&title=&author=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookSearchQuery {
    pub genre: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Add book request
#[derive(Debug, Clone, Deserialize)]
pub struct AddBookRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: String,
}

/// Book as returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub lender_id: UserId,
    pub availability_status: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            book_id: book.book_id,
            title: book.title,
            author: book.author,
            genre: book.genre,
            lender_id: book.lender_id,
            availability_status: book.availability_status,
            created_at: book.created_at,
        }
    }
}

// ============================================================================
// Exchange Requests
// ============================================================================

/// Create exchange request body
///
/// Ids arrive as strings so that a malformed id is a 400, not a 422.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExchangeRequestRequest {
    #[serde(default)]
    pub lender_id: String,
    #[serde(default)]
    pub book_id: String,
}

/// Exchange request as returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequestResponse {
    pub exchange_request_id: ExchangeRequestId,
    pub lender_id: UserId,
    pub requester_id: UserId,
    pub book_id: BookId,
    pub created_at: DateTime<Utc>,
}

impl From<ExchangeRequest> for ExchangeRequestResponse {
    fn from(request: ExchangeRequest) -> Self {
        Self {
            exchange_request_id: request.exchange_request_id,
            lender_id: request.lender_id,
            requester_id: request.requester_id,
            book_id: request.book_id,
            created_at: request.created_at,
        }
    }
}

// ============================================================================
// Lists
// ============================================================================

pub const NO_AVAILABLE_BOOKS: &str = "No available books match the search criteria";
pub const NO_BOOKS_ADDED: &str = "No Books have been added";
pub const NO_REQUESTS: &str = "No Requests";

/// A non-empty list, or a message saying why there is nothing to show
///
/// Empty results are a normal 200 outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BookListResponse {
    Books(Vec<BookResponse>),
    Empty { message: &'static str },
}

impl BookListResponse {
    pub fn new(books: Vec<Book>, empty_message: &'static str) -> Self {
        if books.is_empty() {
            BookListResponse::Empty {
                message: empty_message,
            }
        } else {
            BookListResponse::Books(books.into_iter().map(BookResponse::from).collect())
        }
    }
}
