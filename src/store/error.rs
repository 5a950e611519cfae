//! Error types for vocabulary store operations.

use thiserror::Error;

/// Errors returned by [`VocabularyStore`](super::VocabularyStore) operations.
///
/// Any error means the persisted collection was left unchanged.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A required field is missing or blank
    #[error("Validation failed: {message}")]
    Validation {
        /// Description of the invalid input
        message: String,
    },

    /// A category with this name already exists
    #[error("Category '{name}' already exists")]
    DuplicateName {
        /// The colliding name
        name: String,
    },

    /// The referenced category or word does not exist
    #[error("Not found: {what}")]
    NotFound {
        /// Description of the missing item
        what: String,
    },

    /// I/O error reading or writing the store file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file could not be serialized or parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Create a validation error with a message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a duplicate name error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a not-found error for a category.
    pub fn category_not_found(name: &str) -> Self {
        Self::NotFound {
            what: format!("category '{}'", name),
        }
    }

    /// Create a not-found error for a word position.
    pub fn word_not_found(category: &str, index: usize) -> Self {
        Self::NotFound {
            what: format!("word {} in category '{}'", index, category),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, Self::DuplicateName { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
