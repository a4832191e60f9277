//! Service layer for Libris
//!
//! The service layer owns the catalog state and applies mutations on top of
//! the storage layer.

pub mod library;

pub use library::Library;
