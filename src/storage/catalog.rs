//! Catalog file codec
//!
//! Stores the shelf in catalog.json as a tagged document:
//!
//! ```json
//! { "format": "libris-catalog", "version": 1, "books": [ ... ] }
//! ```
//!
//! Anything that does not carry the expected tag and a supported version
//! loads as an empty shelf. Writes go to a staging file beside the catalog
//! and are renamed into place once synced.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LibrisError, LibrisResult};
use crate::models::{Book, BookId};

use super::ShelfStore;

/// Format tag written into every catalog file
pub const FORMAT_TAG: &str = "libris-catalog";

/// Current catalog file version
pub const FORMAT_VERSION: u32 = 1;

/// Serializable catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    format: String,
    version: u32,
    #[serde(default)]
    books: Vec<Book>,
}

impl CatalogDocument {
    fn new(books: Vec<Book>) -> Self {
        Self {
            format: FORMAT_TAG.to_string(),
            version: FORMAT_VERSION,
            books,
        }
    }

    fn is_compatible(&self) -> bool {
        self.format == FORMAT_TAG && self.version <= FORMAT_VERSION && self.version > 0
    }
}

/// JSON file holding the shelf
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    /// Create a codec for the catalog at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Staging file the next save is written to, e.g. `catalog.json.tmp`
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_document(&self) -> LibrisResult<Option<CatalogDocument>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(LibrisError::Storage(format!(
                    "Failed to open {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|e| {
                LibrisError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
            })
    }

    fn write_document(&self, document: &CatalogDocument) -> LibrisResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LibrisError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let staging = self.staging_path();
        let written = File::create(&staging).and_then(|file| {
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, document)?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
            fs::rename(&staging, &self.path)
        });

        written.map_err(|e| {
            let _ = fs::remove_file(&staging);
            LibrisError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

/// Give every repeated id after its first occurrence a fresh one.
///
/// Returns how many books were re-keyed.
fn assign_unique_ids(books: &mut [Book]) -> usize {
    let mut seen = HashSet::with_capacity(books.len());
    let mut reassigned = 0;

    for book in books.iter_mut() {
        if !seen.insert(book.id) {
            book.id = BookId::new();
            seen.insert(book.id);
            reassigned += 1;
        }
    }

    reassigned
}

impl ShelfStore for CatalogFile {
    fn load(&self) -> Vec<Book> {
        let document = match self.read_document() {
            Ok(Some(document)) => document,
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "no catalog file, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog unreadable, starting empty");
                return Vec::new();
            }
        };

        if !document.is_compatible() {
            tracing::warn!(
                path = %self.path.display(),
                format = %document.format,
                version = document.version,
                "catalog has an incompatible format, starting empty"
            );
            return Vec::new();
        }

        let mut books = document.books;
        let reassigned = assign_unique_ids(&mut books);
        if reassigned > 0 {
            tracing::warn!(reassigned, "catalog repeated book ids, assigned fresh ones");
        }

        tracing::debug!(count = books.len(), "catalog loaded");
        books
    }

    fn save(&self, books: &[Book]) -> LibrisResult<()> {
        self.write_document(&CatalogDocument::new(books.to_vec()))?;
        tracing::debug!(count = books.len(), path = %self.path.display(), "catalog saved");
        Ok(())
    }
}
