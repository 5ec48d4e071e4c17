//! Value Object Module

pub mod book_filter;
pub mod new_book;
