//! Plain JSON format: the collection as pretty-printed JSON.

use serde_json::Value;

use crate::format::error::FormatError;
use crate::format::traits::{ExportOptions, ExportResult, VocabularyFormat};
use crate::model::Collection;

/// JSON export of the collection.
///
/// Output is the bare category map, the same shape the store keeps under its
/// `categories` key. Decoding also accepts the whole store file.
pub struct JsonFormat;

impl VocabularyFormat for JsonFormat {
    fn id(&self) -> &'static str {
        "json"
    }

    fn display_name(&self) -> &'static str {
        "Vocabulary (JSON)"
    }

    fn extensions(&self) -> &[&'static str] {
        &["json"]
    }

    fn is_printable(&self) -> bool {
        false
    }

    fn encode(
        &self,
        collection: &Collection,
        _options: &ExportOptions,
    ) -> Result<(Vec<u8>, ExportResult), FormatError> {
        let json = serde_json::to_string_pretty(collection)?;

        log::info!(
            "Exported {} categories with {} words as JSON",
            collection.len(),
            collection.total_words()
        );

        Ok((
            json.into_bytes(),
            ExportResult {
                categories_exported: collection.len(),
                words_exported: collection.total_words(),
                ..ExportResult::default()
            },
        ))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Collection, FormatError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| FormatError::malformed(e.to_string()))?;
        serde_json::from_value(unwrap_categories(value))
            .map_err(|e| FormatError::malformed(e.to_string()))
    }
}

/// Strip a `{ "categories": { ... } }` store-file wrapper if present.
///
/// The wrapper is only recognized when `categories` is the sole key and its
/// value is not itself shaped like a category (an object with `words`), so
/// a user category literally named "categories" is left alone.
pub fn unwrap_categories(value: Value) -> Value {
    match value {
        Value::Object(mut map)
            if map.len() == 1
                && map
                    .get("categories")
                    .is_some_and(|inner| inner.is_object() && inner.get("words").is_none()) =>
        {
            map.remove("categories").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_metadata() {
        let format = JsonFormat;
        assert_eq!(format.id(), "json");
        assert!(!format.is_printable());
    }

    #[test]
    fn test_unwrap_store_file() {
        let value = json!({ "categories": { "A": { "words": [] } } });
        assert_eq!(unwrap_categories(value), json!({ "A": { "words": [] } }));
    }

    #[test]
    fn test_category_named_categories_is_kept() {
        let value = json!({ "categories": { "words": [], "color": "#000000" } });
        assert_eq!(unwrap_categories(value.clone()), value);

        let value = json!({ "categories": {}, "Other": [] });
        assert_eq!(unwrap_categories(value.clone()), value);
    }
}
