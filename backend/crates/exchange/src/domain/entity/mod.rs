pub mod book;
pub mod exchange_request;
