//! Error types for document export/import operations.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a vocabulary document.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error while encoding
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML serialization error while building metadata
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document carries no embedded vocabulary snapshot
    #[error(
        "No vocabulary data found in document. Make sure it was exported from this application."
    )]
    UnsupportedDocument,

    /// Embedded or supplied data is not a parseable collection
    #[error("Malformed vocabulary data: {message}")]
    MalformedData {
        /// Description of the parse failure
        message: String,
    },

    /// Invalid format structure or content
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of the format error
        message: String,
    },
}

impl FormatError {
    /// Create a malformed data error with a message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedData {
            message: message.into(),
        }
    }

    /// Create an invalid format error with a message.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    pub fn is_unsupported_document(&self) -> bool {
        matches!(self, Self::UnsupportedDocument)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedData { .. })
    }
}
