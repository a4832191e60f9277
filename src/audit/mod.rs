//! Audit logging system for Libris
//!
//! Records every successful catalog mutation (add, remove, borrow, return)
//! in an append-only, line-delimited JSON log.
//!
//! # Example
//!
//! ```rust,ignore
//! use libris::audit::{AuditEntry, AuditLogger};
//! use libris::models::Book;
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let book = Book::new("Dune", "Frank Herbert");
//! logger.log(&AuditEntry::added(&book))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
