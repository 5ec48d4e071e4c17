//! HTTP Handlers
//!
//! Every handler first authorizes the path user against the bearer token.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use identity::{CurrentUser, UserRepository};
use kernel::id::{Id, UserId};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    AddBookInput, AddBookUseCase, AuthorizeActingUserUseCase, CreateExchangeRequestInput,
    CreateExchangeRequestUseCase, ListAvailableBooksUseCase, ListOwnBooksUseCase,
    ListReceivedRequestsUseCase, ListSentRequestsUseCase,
};
use crate::domain::repository::{BookRepository, ExchangeRequestRepository};
use crate::domain::value_object::book_filter::BookFilter;
use crate::error::{ExchangeError, ExchangeResult};
use crate::presentation::dto::{
    AddBookRequest, BookListResponse, BookResponse, BookSearchQuery, CreateExchangeRequestRequest,
    ExchangeRequestResponse, NO_AVAILABLE_BOOKS, NO_BOOKS_ADDED, NO_REQUESTS,
};

/// Shared state for exchange handlers
#[derive(Clone)]
pub struct ExchangeAppState<R, U>
where
    R: BookRepository + ExchangeRequestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub users: Arc<U>,
}

impl<R, U> ExchangeAppState<R, U>
where
    R: BookRepository + ExchangeRequestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    async fn acting_user(&self, user_name: &str, current: &CurrentUser) -> ExchangeResult<UserId> {
        AuthorizeActingUserUseCase::new(self.users.clone())
            .execute(user_name, &current.0)
            .await
    }
}

fn parse_id<T>(field: &str, raw: &str) -> ExchangeResult<Id<T>> {
    Uuid::parse_str(raw.trim())
        .map(Id::from_uuid)
        .map_err(|_| ExchangeError::Validation(format!("{field} must be a valid id")))
}

// ============================================================================
// Books
// ============================================================================

/// GET /users/{user_name}/available-books
pub async fn available_books<R, U>(
    State(state): State<ExchangeAppState<R, U>>,
    Path(user_name): Path<String>,
    Query(query): Query<BookSearchQuery>,
    current: CurrentUser,
) -> ExchangeResult<Json<BookListResponse>>
where
    R: BookRepository + ExchangeRequestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let viewer_id = state.acting_user(&user_name, &current).await?;

    let filter = BookFilter::new(
        query.genre.as_deref(),
        query.title.as_deref(),
        query.author.as_deref(),
    );

    let books = ListAvailableBooksUseCase::new(state.repo.clone())
        .execute(viewer_id, filter)
        .await?;

    Ok(Json(BookListResponse::new(books, NO_AVAILABLE_BOOKS)))
}

/// POST /users/{user_name}/add-book
pub async fn add_book<R, U>(
    State(state): State<ExchangeAppState<R, U>>,
    Path(user_name): Path<String>,
    current: CurrentUser,
    Json(req): Json<AddBookRequest>,
) -> ExchangeResult<(StatusCode, Json<BookResponse>)>
where
    R: BookRepository + ExchangeRequestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let lender_id = state.acting_user(&user_name, &current).await?;

    let input = AddBookInput {
        title: req.title,
        author: req.author,
        genre: req.genre,
    };

    let book = AddBookUseCase::new(state.repo.clone())
        .execute(lender_id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// GET /users/{user_name}/added-books
pub async fn added_books<R, U>(
    State(state): State<ExchangeAppState<R, U>>,
    Path(user_name): Path<String>,
    current: CurrentUser,
) -> ExchangeResult<Json<BookListResponse>>
where
    R: BookRepository + ExchangeRequestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let lender_id = state.acting_user(&user_name, &current).await?;

    let books = ListOwnBooksUseCase::new(state.repo.clone())
        .execute(lender_id)
        .await?;

    Ok(Json(BookListResponse::new(books, NO_BOOKS_ADDED)))
}

// ============================================================================
// Exchange Requests
// ============================================================================

/// POST /users/{user_name}/create-exchange-request
pub async fn create_exchange_request<R, U>(
    State(state): State<ExchangeAppState<R, U>>,
    Path(user_name): Path<String>,
    current: CurrentUser,
    Json(req): Json<CreateExchangeRequestRequest>,
) -> ExchangeResult<(StatusCode, Json<ExchangeRequestResponse>)>
where
    R: BookRepository + ExchangeRequestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let requester_id = state.acting_user(&user_name, &current).await?;

    let input = CreateExchangeRequestInput {
        lender_id: parse_id("lenderId", &req.lender_id)?,
        book_id: parse_id("bookId", &req.book_id)?,
    };

    let request = CreateExchangeRequestUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(requester_id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(request.into())))
}

/// GET /users/{user_name}/sent-requests
pub async fn sent_requests<R, U>(
    State(state): State<ExchangeAppState<R, U>>,
    Path(user_name): Path<String>,
    current: CurrentUser,
) -> ExchangeResult<Json<BookListResponse>>
where
    R: BookRepository + ExchangeRequestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let requester_id = state.acting_user(&user_name, &current).await?;

    let books = ListSentRequestsUseCase::new(state.repo.clone())
        .execute(requester_id)
        .await?;

    Ok(Json(BookListResponse::new(books, NO_REQUESTS)))
}

/// GET /users/{user_name}/received-requests
pub async fn received_requests<R, U>(
    State(state): State<ExchangeAppState<R, U>>,
    Path(user_name): Path<String>,
    current: CurrentUser,
) -> ExchangeResult<Json<BookListResponse>>
where
    R: BookRepository + ExchangeRequestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let lender_id = state.acting_user(&user_name, &current).await?;

    let books = ListReceivedRequestsUseCase::new(state.repo.clone())
        .execute(lender_id)
        .await?;

    Ok(Json(BookListResponse::new(books, NO_REQUESTS)))
}
