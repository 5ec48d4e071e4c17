//! Exchange Request Listing Use Cases
//!
//! Both views return the books behind the requests, not the request rows.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::book::Book;
use crate::domain::repository::ExchangeRequestRepository;
use crate::error::ExchangeResult;

/// Books the user has asked to borrow
pub struct ListSentRequestsUseCase<X>
where
    X: ExchangeRequestRepository,
{
    request_repo: Arc<X>,
}

impl<X> ListSentRequestsUseCase<X>
where
    X: ExchangeRequestRepository,
{
    pub fn new(request_repo: Arc<X>) -> Self {
        Self { request_repo }
    }

    pub async fn execute(&self, requester_id: UserId) -> ExchangeResult<Vec<Book>> {
        self.request_repo.find_books_requested_by(&requester_id).await
    }
}

/// Books other users have asked this lender for
pub struct ListReceivedRequestsUseCase<X>
where
    X: ExchangeRequestRepository,
{
    request_repo: Arc<X>,
}

impl<X> ListReceivedRequestsUseCase<X>
where
    X: ExchangeRequestRepository,
{
    pub fn new(request_repo: Arc<X>) -> Self {
        Self { request_repo }
    }

    pub async fn execute(&self, lender_id: UserId) -> ExchangeResult<Vec<Book>> {
        self.request_repo.find_books_requested_from(&lender_id).await
    }
}
