//! Persistence abstraction and error taxonomy.

/// Flat JSON file store.
pub mod json_file;

use std::fmt;

use crate::core::book::{BookError, ContactBook};

/// Errors surfaced by a [`ContactStore`].
#[derive(Debug)]
pub enum PersistError {
    /// The persisted document does not exist.
    NotFound,
    /// The document is not valid JSON.
    Format(serde_json::Error),
    /// The document is valid JSON but not a well-formed contact dictionary:
    /// missing keys, misaligned array lengths, or duplicate ids.
    Schema(String),
    /// Underlying read or write failure.
    Io(std::io::Error),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "contact file not found"),
            Self::Format(err) => write!(f, "contact file is not valid JSON: {err}"),
            Self::Schema(msg) => write!(f, "contact file schema violation: {msg}"),
            Self::Io(err) => write!(f, "contact file I/O failure: {err}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        if value.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound
        } else {
            Self::Io(value)
        }
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match value.classify() {
            // Structurally valid JSON that doesn't fit the dictionary shape.
            Category::Data => Self::Schema(value.to_string()),
            Category::Io => Self::Io(value.into()),
            Category::Syntax | Category::Eof => Self::Format(value),
        }
    }
}

impl From<BookError> for PersistError {
    fn from(value: BookError) -> Self {
        Self::Schema(value.to_string())
    }
}

/// Result alias for store operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Whole-collection load/save seam between the book and its backing file.
///
/// Implementations persist the collection as a single document; there are no
/// partial updates.
pub trait ContactStore {
    /// Loads the entire collection.
    fn load(&self) -> PersistResult<ContactBook>;
    /// Replaces the persisted collection with `book`.
    fn save(&mut self, book: &ContactBook) -> PersistResult<()>;
}
