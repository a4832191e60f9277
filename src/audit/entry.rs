//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Book, BookId, Loan};

/// Catalog operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Book was added to the shelf
    Add,
    /// Book was removed from the shelf
    Remove,
    /// Book left the shelf on loan
    Borrow,
    /// Book came back to the shelf
    Return,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Remove => write!(f, "REMOVE"),
            Operation::Borrow => write!(f, "BORROW"),
            Operation::Return => write!(f, "RETURN"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected copy
    pub book_id: BookId,

    /// Title at the time of the operation
    pub title: String,

    /// Author at the time of the operation
    pub author: String,

    /// Borrower, for borrow and return operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrower: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, book: &Book, borrower: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            book_id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            borrower,
        }
    }

    /// Entry for a book added to the shelf
    pub fn added(book: &Book) -> Self {
        Self::new(Operation::Add, book, None)
    }

    /// Entry for a book removed from the shelf
    pub fn removed(book: &Book) -> Self {
        Self::new(Operation::Remove, book, None)
    }

    /// Entry for a new loan
    pub fn borrowed(loan: &Loan) -> Self {
        Self::new(Operation::Borrow, &loan.book, Some(loan.borrower.clone()))
    }

    /// Entry for a returned book
    pub fn returned(book: &Book, borrower: impl Into<String>) -> Self {
        Self::new(Operation::Return, book, Some(borrower.into()))
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} '{}' by {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.book_id,
            self.title,
            self.author
        );

        if let Some(borrower) = &self.borrower {
            output.push_str(&format!(" (borrower: {})", borrower));
        }

        output
    }
}
