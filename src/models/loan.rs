//! Loan model
//!
//! A loan ties a book taken off the shelf to the person holding it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::book::Book;

/// A borrowed book and its current holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// The borrowed copy
    pub book: Book,

    /// Name of the borrower, as entered
    pub borrower: String,

    /// When the book left the shelf
    pub borrowed_at: DateTime<Utc>,
}

impl Loan {
    /// Create a loan starting now
    pub fn new(book: Book, borrower: impl Into<String>) -> Self {
        Self {
            book,
            borrower: borrower.into(),
            borrowed_at: Utc::now(),
        }
    }

    /// Check if this loan is for `title` and held by `borrower`, ignoring case
    pub fn matches(&self, title: &str, borrower: &str) -> bool {
        self.book.matches_title(title) && self.borrower.to_lowercase() == borrower.to_lowercase()
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} borrowed {}", self.borrower, self.book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_requires_title_and_borrower() {
        let loan = Loan::new(Book::new("Dune", "Herbert"), "Alice");

        assert!(loan.matches("dune", "alice"));
        assert!(loan.matches("DUNE", "ALICE"));
        assert!(!loan.matches("Dune", "Bob"));
        assert!(!loan.matches("Emma", "Alice"));
    }

    #[test]
    fn test_display() {
        let loan = Loan::new(Book::new("Dune", "Herbert"), "Alice");
        assert_eq!(loan.to_string(), "Alice borrowed Dune by Herbert");
    }
}
