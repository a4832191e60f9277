//! Library service
//!
//! Holds the authoritative shelf and loan ledger. Every successful mutation
//! writes the shelf through to the store and appends an audit entry.
//!
//! A failed write does not roll the mutation back: the operation returns
//! [`LibrisError::Persistence`] and the in-memory catalog keeps the change.

use std::collections::HashMap;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{LibrisError, LibrisResult};
use crate::models::{Book, BookId, Loan};
use crate::storage::{CatalogFile, ShelfStore};

/// Catalog state and the operations on it
pub struct Library<S: ShelfStore = CatalogFile> {
    store: S,
    available: Vec<Book>,
    borrowed: HashMap<BookId, Loan>,
    audit: Option<AuditLogger>,
}

impl<S: ShelfStore> Library<S> {
    /// Open a library from its store. An unusable store yields an empty shelf.
    pub fn open(store: S) -> Self {
        let available = store.load();
        tracing::info!(books = available.len(), "library opened");
        Self {
            store,
            available,
            borrowed: HashMap::new(),
            audit: None,
        }
    }

    /// Attach an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a new book to the shelf
    pub fn add_book(&mut self, title: &str, author: &str) -> LibrisResult<Book> {
        let book = Book::new(title, author);
        self.available.push(book.clone());
        tracing::info!(id = %book.id, title, "book added");

        self.record(AuditEntry::added(&book));
        self.persist()?;
        Ok(book)
    }

    /// Remove the first shelf copy whose title matches
    ///
    /// Lent-out copies are not considered.
    pub fn remove_book(&mut self, title: &str) -> LibrisResult<Book> {
        let index = self
            .shelf_position(title)
            .ok_or_else(|| LibrisError::book_not_found(title))?;

        let book = self.available.remove(index);
        tracing::info!(id = %book.id, title = %book.title, "book removed");

        self.record(AuditEntry::removed(&book));
        self.persist()?;
        Ok(book)
    }

    /// Lend the first shelf copy whose title matches to `borrower`
    pub fn borrow_book(&mut self, title: &str, borrower: &str) -> LibrisResult<Loan> {
        let index = self
            .shelf_position(title)
            .ok_or_else(|| LibrisError::not_available(title))?;

        let mut book = self.available.remove(index);
        if self.borrowed.contains_key(&book.id) {
            // Never overwrite a live loan; the copy gets its own identity instead
            tracing::warn!(id = %book.id, "shelf copy shares an id with a lent book, re-keying");
            book.id = BookId::new();
        }
        let loan = Loan::new(book, borrower);
        tracing::info!(id = %loan.book.id, title = %loan.book.title, borrower, "book borrowed");

        self.record(AuditEntry::borrowed(&loan));
        self.borrowed.insert(loan.book.id, loan.clone());
        self.persist()?;
        Ok(loan)
    }

    /// Put a lent copy back on the shelf
    ///
    /// Both the title and the recorded borrower must match.
    pub fn return_book(&mut self, title: &str, borrower: &str) -> LibrisResult<Book> {
        let id = self
            .borrowed
            .iter()
            .find(|(_, loan)| loan.matches(title, borrower))
            .map(|(id, _)| *id);

        let Some(loan) = id.and_then(|id| self.borrowed.remove(&id)) else {
            return Err(LibrisError::loan_not_found(title, borrower));
        };
        tracing::info!(id = %loan.book.id, title = %loan.book.title, borrower = %loan.borrower, "book returned");

        self.record(AuditEntry::returned(&loan.book, &loan.borrower));
        self.available.push(loan.book.clone());
        self.persist()?;
        Ok(loan.book)
    }

    /// Books on the shelf, in insertion order
    pub fn list_available(&self) -> &[Book] {
        &self.available
    }

    /// Current loans as (borrower, book) pairs, in no particular order
    pub fn list_borrowed(&self) -> Vec<(&str, &Book)> {
        self.borrowed
            .values()
            .map(|loan| (loan.borrower.as_str(), &loan.book))
            .collect()
    }

    /// Number of books on the shelf
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Number of books out on loan
    pub fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }

    fn shelf_position(&self, title: &str) -> Option<usize> {
        self.available.iter().position(|b| b.matches_title(title))
    }

    /// Write the shelf through to the store.
    ///
    /// The ledger is not persisted; this is the only write site.
    fn persist(&self) -> LibrisResult<()> {
        self.store.save(&self.available).map_err(|e| {
            tracing::error!(error = %e, "failed to save catalog");
            LibrisError::Persistence(e.to_string())
        })
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                tracing::warn!(error = %e, operation = %entry.operation, "failed to write audit entry");
            }
        }
    }
}
