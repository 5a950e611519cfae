//! Category data model for grouping words.

use serde::{Deserialize, Serialize};

use super::Word;

/// Color assigned to categories created without one.
pub const DEFAULT_COLOR: &str = "#667eea";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// A colored, ordered group of words.
///
/// The category name is the key it is stored under in a
/// [`Collection`](super::Collection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Words in display order; dense and index-addressed
    #[serde(default)]
    pub words: Vec<Word>,
    /// Display color as a hex string (e.g. `#667eea`)
    #[serde(default = "default_color")]
    pub color: String,
    /// Position among all categories; smaller sorts first
    #[serde(default)]
    pub order: u32,
}

impl Category {
    /// Create an empty category with the given color and order.
    pub fn new(color: impl Into<String>, order: u32) -> Self {
        Self {
            words: Vec::new(),
            color: color.into(),
            order,
        }
    }

    /// Set the words.
    pub fn with_words(mut self, words: Vec<Word>) -> Self {
        self.words = words;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR, 0)
    }
}
