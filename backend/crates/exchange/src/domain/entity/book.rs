//! Book Entity

use chrono::{DateTime, Utc};
use kernel::id::{BookId, UserId};

use crate::domain::value_object::new_book::NewBook;

/// A book listed by its lender
///
/// `lender_id` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub lender_id: UserId,
    pub availability_status: bool,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// List a new book; it starts out available
    pub fn new(lender_id: UserId, details: NewBook) -> Self {
        let NewBook {
            title,
            author,
            genre,
        } = details;

        Self {
            book_id: BookId::new(),
            title,
            author,
            genre,
            lender_id,
            availability_status: true,
            created_at: Utc::now(),
        }
    }

    pub fn is_lent_by(&self, user_id: &UserId) -> bool {
        &self.lender_id == user_id
    }
}
