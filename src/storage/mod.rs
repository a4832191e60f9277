//! Storage layer for Libris
//!
//! Provides the persistence boundary for the shelf and its JSON file
//! implementation.

pub mod catalog;

pub use catalog::CatalogFile;

use crate::error::LibrisResult;
use crate::models::Book;

/// Durable home of the shelf
///
/// Only the available books pass through this boundary; the loan ledger
/// lives for the process lifetime.
pub trait ShelfStore {
    /// Read the stored shelf. Absent or unusable data yields an empty shelf.
    fn load(&self) -> Vec<Book>;

    /// Overwrite the stored shelf with `books`
    fn save(&self, books: &[Book]) -> LibrisResult<()>;
}
