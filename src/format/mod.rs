//! Vocabulary document export/import.
//!
//! This module provides a trait-based system for turning a [`Collection`]
//! into a document and recovering it again. New formats are added by
//! implementing [`VocabularyFormat`] and registering them.
//!
//! ## Supported Formats
//!
//! - **PDF**: Printable pages per category, with the complete collection
//!   embedded in the document's XMP metadata for lossless re-import
//! - **JSON**: The collection as pretty-printed JSON
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vocab::format::{ExportOptions, FormatRegistry};
//!
//! let registry = FormatRegistry::new();
//! let pdf = registry.get("pdf").unwrap();
//! let (bytes, _) = pdf.encode(&collection, &ExportOptions::default())?;
//! assert_eq!(pdf.decode(&bytes)?, collection);
//! ```
//!
//! [`Collection`]: crate::model::Collection

mod error;
pub mod formats;
pub mod layout;
mod registry;
mod traits;
pub mod xmp;

pub use error::FormatError;
pub use formats::{JsonFormat, PdfFormat};
pub use layout::PageLayout;
pub use registry::FormatRegistry;
pub use traits::{ExportOptions, ExportResult, FormatWarning, VocabularyFormat};
