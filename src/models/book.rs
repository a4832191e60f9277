//! Book model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BookId;

/// A single physical copy in the catalog
///
/// Books are immutable once created. Lookups match on title only,
/// ignoring case; the author never takes part in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Surrogate identity, assigned at creation
    #[serde(default)]
    pub id: BookId,

    /// Title of the book
    pub title: String,

    /// Author of the book
    pub author: String,
}

impl Book {
    /// Create a new book with a fresh ID
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
        }
    }

    /// Normalize a title for matching
    pub fn normalize_title(title: &str) -> String {
        title.to_lowercase()
    }

    /// Check if this book's title matches (case-insensitive, exact)
    pub fn matches_title(&self, title: &str) -> bool {
        Self::normalize_title(&self.title) == Self::normalize_title(title)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book() {
        let book = Book::new("Dune", "Frank Herbert");
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
    }

    #[test]
    fn test_matches_title_ignores_case() {
        let book = Book::new("Dune Messiah", "Frank Herbert");
        assert!(book.matches_title("dune messiah"));
        assert!(book.matches_title("DUNE MESSIAH"));
        assert!(!book.matches_title("Dune"));
        assert!(!book.matches_title(" dune messiah"));
    }

    #[test]
    fn test_same_title_and_author_are_distinct_copies() {
        let a = Book::new("Dune", "Herbert");
        let b = Book::new("Dune", "Herbert");
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn test_missing_id_gets_fresh_one() {
        let book: Book = serde_json::from_str(r#"{"title": "Dune", "author": "Herbert"}"#).unwrap();
        assert_eq!(book.title, "Dune");
        assert!(!book.id.as_uuid().is_nil());
    }

    #[test]
    fn test_display() {
        let book = Book::new("Dune", "Herbert");
        assert_eq!(book.to_string(), "Dune by Herbert");
    }
}
