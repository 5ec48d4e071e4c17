//! Application Layer
//!
//! One use case per exchange operation.

pub mod add_book;
pub mod authorize;
pub mod create_exchange_request;
pub mod list_books;
pub mod list_requests;

// Re-exports
pub use add_book::{AddBookInput, AddBookUseCase};
pub use authorize::AuthorizeActingUserUseCase;
pub use create_exchange_request::{CreateExchangeRequestInput, CreateExchangeRequestUseCase};
pub use list_books::{ListAvailableBooksUseCase, ListOwnBooksUseCase};
pub use list_requests::{ListReceivedRequestsUseCase, ListSentRequestsUseCase};
