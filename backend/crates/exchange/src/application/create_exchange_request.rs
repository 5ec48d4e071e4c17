//! Create Exchange Request Use Case

use std::sync::Arc;

use kernel::id::{BookId, UserId};

use crate::domain::entity::exchange_request::ExchangeRequest;
use crate::domain::repository::{BookRepository, ExchangeRequestRepository};
use crate::error::{ExchangeError, ExchangeResult};

/// Create exchange request input
pub struct CreateExchangeRequestInput {
    pub lender_id: UserId,
    pub book_id: BookId,
}

/// Create exchange request use case
pub struct CreateExchangeRequestUseCase<B, X>
where
    B: BookRepository,
    X: ExchangeRequestRepository,
{
    book_repo: Arc<B>,
    request_repo: Arc<X>,
}

impl<B, X> CreateExchangeRequestUseCase<B, X>
where
    B: BookRepository,
    X: ExchangeRequestRepository,
{
    pub fn new(book_repo: Arc<B>, request_repo: Arc<X>) -> Self {
        Self {
            book_repo,
            request_repo,
        }
    }

    /// Checks in order: self request, book ownership, duplicate
    pub async fn execute(
        &self,
        requester_id: UserId,
        input: CreateExchangeRequestInput,
    ) -> ExchangeResult<ExchangeRequest> {
        let CreateExchangeRequestInput { lender_id, book_id } = input;

        if requester_id == lender_id {
            return Err(ExchangeError::SelfRequestNotAllowed);
        }

        // Absent and foreign books are reported identically
        match self.book_repo.find_by_id(&book_id).await? {
            Some(book) if book.is_lent_by(&lender_id) => {}
            _ => return Err(ExchangeError::BookNotFoundOrNotOwned),
        }

        if self
            .request_repo
            .exists_by_requester_and_book(&requester_id, &book_id)
            .await?
        {
            return Err(ExchangeError::DuplicateRequest);
        }

        let request = ExchangeRequest::new(requester_id, lender_id, book_id);
        self.request_repo.create(&request).await?;

        tracing::info!(
            exchange_request_id = %request.exchange_request_id,
            requester_id = %requester_id,
            lender_id = %lender_id,
            book_id = %book_id,
            "Exchange request created"
        );

        Ok(request)
    }
}
