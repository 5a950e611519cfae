//! Trait definitions for vocabulary document formats.

use std::path::{Path, PathBuf};

use crate::format::error::FormatError;
use crate::format::layout::PageLayout;
use crate::model::Collection;

/// Trait for vocabulary export/import implementations.
///
/// Each format (PDF, JSON) converts between a [`Collection`] and document
/// bytes. `decode` must be the exact inverse of `encode` for documents this
/// application produced.
pub trait VocabularyFormat: Send + Sync {
    /// Unique identifier for this format (e.g., "pdf", "json").
    fn id(&self) -> &'static str;

    /// Human-readable name for display.
    fn display_name(&self) -> &'static str;

    /// File extensions this format uses.
    fn extensions(&self) -> &[&'static str];

    /// Whether the output has a human-readable paginated rendering.
    fn is_printable(&self) -> bool;

    /// Encode a collection into document bytes.
    fn encode(
        &self,
        collection: &Collection,
        options: &ExportOptions,
    ) -> Result<(Vec<u8>, ExportResult), FormatError>;

    /// Recover the collection from document bytes.
    fn decode(&self, bytes: &[u8]) -> Result<Collection, FormatError>;

    /// Encode and write to `path`.
    fn export(
        &self,
        collection: &Collection,
        path: &Path,
        options: &ExportOptions,
    ) -> Result<ExportResult, FormatError> {
        log::info!("Exporting vocabulary as {} to {:?}", self.id(), path);

        let (bytes, mut result) = self.encode(collection, options)?;
        std::fs::write(path, &bytes)?;
        result.files_created = vec![path.to_path_buf()];
        Ok(result)
    }

    /// Read `path` and decode it.
    fn import(&self, path: &Path) -> Result<Collection, FormatError> {
        log::info!("Importing vocabulary as {} from {:?}", self.id(), path);

        let bytes = std::fs::read(path)?;
        let collection = self.decode(&bytes)?;

        log::info!(
            "Recovered {} categories with {} words",
            collection.len(),
            collection.total_words()
        );
        Ok(collection)
    }
}

/// Options for export operations.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Page geometry for printable formats.
    pub page: PageLayout,

    /// Document title written to document metadata.
    pub title: Option<String>,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn page(mut self, page: PageLayout) -> Self {
        self.page = page;
        self
    }

    /// Set the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Result of an export operation.
#[derive(Debug, Default)]
pub struct ExportResult {
    /// Number of categories in the embedded snapshot.
    pub categories_exported: usize,

    /// Number of categories that produced a visible section.
    pub sections_rendered: usize,

    /// Number of words exported.
    pub words_exported: usize,

    /// Number of pages produced (0 for non-printable formats).
    pub pages: usize,

    /// Warnings generated during export (e.g., characters the page font lacks).
    pub warnings: Vec<FormatWarning>,

    /// Files created during export.
    pub files_created: Vec<PathBuf>,
}

impl ExportResult {
    /// Add a warning to the result.
    pub fn add_warning(&mut self, warning: FormatWarning) {
        self.warnings.push(warning);
    }

    /// Check if there were any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Warning generated during format conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatWarning {
    /// Category this warning relates to (if applicable).
    pub category: Option<String>,

    /// Human-readable warning message.
    pub message: String,
}

impl FormatWarning {
    /// Create a new warning.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            category: None,
            message: message.into(),
        }
    }

    /// Set the category this warning relates to.
    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(name.into());
        self
    }
}
