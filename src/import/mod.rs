//! Importing vocabulary from documents and hand-written JSON.
//!
//! An import runs in three steps:
//!
//! 1. [`read_payload`] turns file bytes into an [`ImportPayload`], decoding
//!    exported PDFs through their embedded snapshot and normalizing JSON
//! 2. [`ImportPreview`] summarizes what would be imported
//! 3. [`Reconciler`] applies the payload to a store, counting imported words
//!    and errors
//!
//! Import is best-effort: bad entries are counted and skipped, and words
//! already written stay written if a later step fails.

mod payload;
mod preview;
mod reconcile;

use std::path::Path;

pub use payload::{ImportPayload, ImportedCategory, PayloadEntry, RawWord};
pub use preview::{ImportPreview, PreviewEntry};
pub use reconcile::{ImportReport, Reconciler};

use crate::format::{FormatError, PdfFormat, VocabularyFormat};

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Parse import bytes, detecting exported PDFs by their header.
pub fn parse_payload(bytes: &[u8]) -> Result<ImportPayload, FormatError> {
    if bytes.starts_with(PDF_MAGIC) {
        let collection = PdfFormat.decode(bytes)?;
        log::info!(
            "Recovered {} categories with {} words from document",
            collection.len(),
            collection.total_words()
        );
        Ok(ImportPayload::from_collection(&collection))
    } else {
        ImportPayload::from_json_slice(bytes)
    }
}

/// Read and parse an import file.
pub fn read_payload(path: &Path) -> Result<ImportPayload, FormatError> {
    log::info!("Reading import data from {:?}", path);
    let bytes = std::fs::read(path)?;
    parse_payload(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ExportOptions;
    use crate::model::{Category, Collection, Word};
    use crate::store::{MemoryAdapter, VocabularyStore};

    #[test]
    fn test_pdf_bytes_go_through_the_snapshot() {
        let mut collection = Collection::new();
        collection.insert(
            "Food & Drink",
            Category::new("#aa5500", 0).with_words(vec![Word::new("coffee", "café")]),
        );
        let (bytes, _) = PdfFormat
            .encode(&collection, &ExportOptions::default())
            .unwrap();

        let payload = parse_payload(&bytes).unwrap();
        let store = VocabularyStore::new(MemoryAdapter::new());
        let report = Reconciler::new(&store).apply(&payload);

        assert_eq!(report.imported, 1);
        assert_eq!(store.list_categories().unwrap(), collection);
    }

    #[test]
    fn test_foreign_pdf_is_unsupported() {
        let err = parse_payload(b"%PDF-1.4\n1 0 obj << >> endobj\n%%EOF").unwrap_err();
        assert!(err.is_unsupported_document());
    }

    #[test]
    fn test_json_bytes_are_normalized() {
        let payload = parse_payload(br#"{ "A": [{ "english": "x", "spanish": "y" }] }"#).unwrap();
        assert_eq!(payload.total_words(), 1);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_payload(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
    }
}
