//! Tests for the plain JSON format.

use crate::format::formats::JsonFormat;
use crate::format::traits::{ExportOptions, VocabularyFormat};
use crate::model::{Category, Collection, Word};

fn sample_collection() -> Collection {
    let mut collection = Collection::new();
    collection.insert(
        "Colors",
        Category::new("#ff0000", 1).with_words(vec![Word::new("red", "rojo")]),
    );
    collection.insert("Later", Category::new("#00ff00", 0));
    collection
}

#[test]
fn test_encode_is_pretty_category_map() {
    let (bytes, result) = JsonFormat
        .encode(&sample_collection(), &ExportOptions::default())
        .unwrap();
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["Colors"]["words"][0]["spanish"], "rojo");
    assert_eq!(value["Later"]["order"], 0);
    assert_eq!(result.categories_exported, 2);
    assert_eq!(result.words_exported, 1);
    assert_eq!(result.pages, 0);
}

#[test]
fn test_decode_store_file_shape() {
    let store_file = br##"{
        "categories": {
            "Colors": { "words": [{ "english": "red", "spanish": "rojo" }], "color": "#ff0000", "order": 1 },
            "Later": { "words": [], "color": "#00ff00", "order": 0 }
        }
    }"##;
    assert_eq!(JsonFormat.decode(store_file).unwrap(), sample_collection());
}

#[test]
fn test_decode_garbage_is_malformed() {
    assert!(JsonFormat.decode(b"not json at all").unwrap_err().is_malformed());
    assert!(JsonFormat.decode(b"[1, 2, 3]").unwrap_err().is_malformed());
}

#[test]
fn test_decode_legacy_array_is_malformed() {
    // Bare word arrays are only accepted by import normalization.
    let legacy = br#"{ "Animals": [{ "english": "cat", "spanish": "gato" }] }"#;
    assert!(JsonFormat.decode(legacy).unwrap_err().is_malformed());
}
