//! Book identity
//!
//! The ledger keys borrowed books by a surrogate ID rather than by title,
//! so two copies with the same title and author never collide.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Surrogate identity of a single copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bk-{}", &self.0.to_string()[..8])
    }
}
