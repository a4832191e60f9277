//! Display formatting for terminal output
//!
//! Renders shelf listings, loans and audit history as plain text.

pub mod book;

pub use book::{format_book_list, format_history, format_loan_list};
