//! Core data models for Libris
//!
//! Books on the shelf and the loans that take them off it.

pub mod book;
pub mod ids;
pub mod loan;

pub use book::Book;
pub use ids::BookId;
pub use loan::Loan;
