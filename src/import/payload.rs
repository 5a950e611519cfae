//! Normalization of externally supplied vocabulary data.
//!
//! Two category shapes are accepted:
//!
//! ```json
//! { "Animals": [{ "english": "cat", "spanish": "gato" }] }
//! { "Animals": { "words": [...], "color": "#667eea", "order": 0 } }
//! ```
//!
//! The first is the legacy form without color or order. Both normalize to
//! [`ImportedCategory`].

use serde::Deserialize;
use serde_json::Value;

use crate::format::FormatError;
use crate::format::formats::unwrap_categories;
use crate::model::{Collection, DEFAULT_COLOR, Word};

/// A word entry as found in the input. Either term may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawWord {
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub spanish: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl RawWord {
    /// Read a word entry; anything that is not word-shaped becomes an entry
    /// with neither term set.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

impl From<&Word> for RawWord {
    fn from(word: &Word) -> Self {
        Self {
            english: Some(word.english.clone()),
            spanish: Some(word.spanish.clone()),
            synonyms: word.synonyms.clone(),
            examples: word.examples.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryShape {
    Legacy(Vec<Value>),
    Canonical {
        #[serde(default)]
        words: Vec<Value>,
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        order: Option<u32>,
    },
}

/// A category after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedCategory {
    pub name: String,
    pub words: Vec<RawWord>,
    pub color: String,
    pub order: u32,
}

/// One input category, normalized or rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadEntry {
    Category(ImportedCategory),
    /// The value under this name matched neither accepted shape.
    Unrecognized { name: String },
}

/// Normalized import input, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportPayload {
    pub entries: Vec<PayloadEntry>,
}

impl ImportPayload {
    /// Parse raw JSON bytes. An optional `{ "categories": ... }` wrapper is
    /// stripped.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, FormatError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| FormatError::malformed(e.to_string()))?;
        Self::from_value(value)
    }

    /// Normalize a parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, FormatError> {
        let Value::Object(map) = unwrap_categories(value) else {
            return Err(FormatError::malformed(
                "expected an object mapping category names to categories",
            ));
        };

        let entries = map
            .into_iter()
            .enumerate()
            .map(|(position, (name, value))| normalize(name, value, position as u32))
            .collect();
        Ok(Self { entries })
    }

    /// Wrap a collection recovered from a document. Categories come in
    /// display order.
    pub fn from_collection(collection: &Collection) -> Self {
        let entries = collection
            .sorted()
            .into_iter()
            .map(|(name, category)| {
                PayloadEntry::Category(ImportedCategory {
                    name: name.to_string(),
                    words: category.words.iter().map(RawWord::from).collect(),
                    color: category.color.clone(),
                    order: category.order,
                })
            })
            .collect();
        Self { entries }
    }

    /// Normalized categories, skipping unrecognized entries.
    pub fn categories(&self) -> impl Iterator<Item = &ImportedCategory> {
        self.entries.iter().filter_map(|entry| match entry {
            PayloadEntry::Category(category) => Some(category),
            PayloadEntry::Unrecognized { .. } => None,
        })
    }

    /// Number of word entries across all recognized categories.
    pub fn total_words(&self) -> usize {
        self.categories().map(|c| c.words.len()).sum()
    }
}

fn normalize(name: String, value: Value, position: u32) -> PayloadEntry {
    match serde_json::from_value::<CategoryShape>(value) {
        Ok(CategoryShape::Legacy(words)) => PayloadEntry::Category(ImportedCategory {
            name,
            words: words.into_iter().map(RawWord::from_value).collect(),
            color: DEFAULT_COLOR.to_string(),
            order: position,
        }),
        Ok(CategoryShape::Canonical {
            words,
            color,
            order,
        }) => PayloadEntry::Category(ImportedCategory {
            name,
            words: words.into_iter().map(RawWord::from_value).collect(),
            color: color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            order: order.unwrap_or(position),
        }),
        Err(e) => {
            log::warn!("Category '{}' has an unrecognized shape: {}", name, e);
            PayloadEntry::Unrecognized { name }
        }
    }
}
