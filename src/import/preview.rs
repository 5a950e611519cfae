//! Summary of an import payload, shown before anything is written.

use crate::format::FormatError;
use crate::import::payload::ImportPayload;

/// One category as it would be imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    pub name: String,
    pub color: String,
    pub order: u32,
    pub word_count: usize,
}

/// Summary of a payload shown before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPreview {
    /// Recognized categories, sorted by normalized order then name
    pub entries: Vec<PreviewEntry>,
    pub total_words: usize,
}

impl ImportPreview {
    /// Summarize `payload`. A payload without a single word entry is
    /// rejected.
    pub fn new(payload: &ImportPayload) -> Result<Self, FormatError> {
        let mut entries: Vec<PreviewEntry> = payload
            .categories()
            .map(|category| PreviewEntry {
                name: category.name.clone(),
                color: category.color.clone(),
                order: category.order,
                word_count: category.words.len(),
            })
            .collect();
        entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));

        let total_words = payload.total_words();
        if total_words == 0 {
            return Err(FormatError::malformed("no words found"));
        }

        Ok(Self {
            entries,
            total_words,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preview_lists_normalized_categories() {
        let payload = ImportPayload::from_value(json!({
            "Verbs": { "words": [{ "english": "run", "spanish": "correr" }], "order": 5 },
            "Animals": [{ "english": "cat", "spanish": "gato" }, { "english": "dog" }]
        }))
        .unwrap();

        let preview = ImportPreview::new(&payload).unwrap();
        assert_eq!(preview.total_words, 3);
        assert_eq!(
            preview.entries,
            vec![
                PreviewEntry {
                    name: "Animals".into(),
                    color: "#667eea".into(),
                    order: 1,
                    word_count: 2,
                },
                PreviewEntry {
                    name: "Verbs".into(),
                    color: "#667eea".into(),
                    order: 5,
                    word_count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_no_words_is_rejected() {
        let payload = ImportPayload::from_value(json!({ "Empty": [], "Bad": "x" })).unwrap();
        let err = ImportPreview::new(&payload).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("no words found"));
    }
}
