//! Format registry for discovering and accessing vocabulary formats.

use std::collections::HashMap;
use std::path::Path;

use crate::format::formats::{JsonFormat, PdfFormat};
use crate::format::traits::VocabularyFormat;

/// Registry of available vocabulary formats.
///
/// All built-in formats are registered automatically on creation.
pub struct FormatRegistry {
    formats: HashMap<&'static str, Box<dyn VocabularyFormat>>,
}

impl FormatRegistry {
    /// Create a new registry with all built-in formats registered.
    pub fn new() -> Self {
        let mut registry = Self {
            formats: HashMap::new(),
        };

        registry.register(Box::new(PdfFormat));
        registry.register(Box::new(JsonFormat));

        registry
    }

    /// Register a format implementation.
    pub fn register(&mut self, format: Box<dyn VocabularyFormat>) {
        self.formats.insert(format.id(), format);
    }

    /// Get a format by its ID.
    pub fn get(&self, id: &str) -> Option<&dyn VocabularyFormat> {
        self.formats.get(id).map(|f| f.as_ref())
    }

    /// Find the format for a file extension (case-insensitive).
    pub fn by_extension(&self, ext: &str) -> Option<&dyn VocabularyFormat> {
        let ext = ext.to_ascii_lowercase();
        self.formats
            .values()
            .find(|f| f.extensions().iter().any(|e| *e == ext))
            .map(|f| f.as_ref())
    }

    /// Find the format for a path by its extension.
    pub fn for_path(&self, path: &Path) -> Option<&dyn VocabularyFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.by_extension(ext))
    }

    /// Get all format IDs, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.formats.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
