//! Exchange Request Entity

use chrono::{DateTime, Utc};
use kernel::id::{BookId, ExchangeRequestId, UserId};

/// A requester's standing interest in a lender's book
///
/// At most one exists per `(requester_id, book_id)`, and `lender_id` equals
/// the book's lender at the time of creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRequest {
    pub exchange_request_id: ExchangeRequestId,
    pub lender_id: UserId,
    pub requester_id: UserId,
    pub book_id: BookId,
    pub created_at: DateTime<Utc>,
}

impl ExchangeRequest {
    pub fn new(requester_id: UserId, lender_id: UserId, book_id: BookId) -> Self {
        Self {
            exchange_request_id: ExchangeRequestId::new(),
            lender_id,
            requester_id,
            book_id,
            created_at: Utc::now(),
        }
    }
}
