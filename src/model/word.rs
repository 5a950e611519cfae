//! A single english/spanish word pair.

use serde::{Deserialize, Serialize};

/// An english/spanish pair with optional synonyms and example sentences.
///
/// Words have no stable id: inside a category they are addressed by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// English term
    pub english: String,
    /// Spanish translation
    pub spanish: String,
    /// Alternative terms, in display order
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Example sentences, in display order
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Word {
    /// Create a word with no synonyms or examples.
    pub fn new(english: impl Into<String>, spanish: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            spanish: spanish.into(),
            synonyms: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Set the synonyms.
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    /// Set the example sentences.
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    /// A word is valid when both terms contain non-whitespace text.
    pub fn is_valid(&self) -> bool {
        !self.english.trim().is_empty() && !self.spanish.trim().is_empty()
    }

    pub fn has_synonyms(&self) -> bool {
        !self.synonyms.is_empty()
    }

    pub fn has_examples(&self) -> bool {
        !self.examples.is_empty()
    }
}
