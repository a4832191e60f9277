//! Libris - Terminal-based library catalog manager
//!
//! Tracks the books on a single library's shelf and who holds each borrowed
//! copy. The shelf is written through to a JSON file after every change; the
//! loan ledger lives for the lifetime of the process.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Books, IDs and loans
//! - `storage`: The shelf persistence boundary and its JSON file codec
//! - `audit`: Append-only log of catalog mutations
//! - `services`: The library itself (shelf + ledger + write-through)
//! - `display`: Plain-text rendering
//! - `cli`: Interactive menu and one-shot commands
//!
//! # Example
//!
//! ```rust,ignore
//! use libris::services::Library;
//! use libris::storage::CatalogFile;
//!
//! let mut library = Library::open(CatalogFile::new("catalog.json"));
//! library.add_book("Dune", "Frank Herbert")?;
//! library.borrow_book("dune", "Alice")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LibrisError, LibrisResult};
