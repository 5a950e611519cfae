//! Vocabulary store: all mutations of the persisted collection.
//!
//! Every operation re-reads the collection from its [`PersistenceAdapter`],
//! applies the change in memory and writes the whole collection back. The
//! write only happens after validation passes, so an error always means
//! "no change made".
//!
//! Read-modify-write cycles within one process are serialized by a single
//! gate. Separate processes sharing a store file are not coordinated: the
//! last writer wins.

mod error;
mod persistence;

#[cfg(test)]
mod tests;

use std::sync::{Mutex, PoisonError};

pub use error::StoreError;
pub use persistence::{JsonFileAdapter, MemoryAdapter, PersistenceAdapter};

use crate::model::{Category, Collection, DEFAULT_COLOR, Word};

/// Word fields supplied by a caller for add/update.
#[derive(Debug, Clone, Default)]
pub struct WordInput {
    pub english: String,
    pub spanish: String,
    pub synonyms: Vec<String>,
    pub examples: Vec<String>,
}

impl WordInput {
    pub fn new(english: impl Into<String>, spanish: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            spanish: spanish.into(),
            synonyms: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Set the synonyms.
    pub fn synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Set the example sentences.
    pub fn examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }

    fn into_word(self) -> Result<Word, StoreError> {
        if self.english.trim().is_empty() {
            return Err(StoreError::validation("english is required"));
        }
        if self.spanish.trim().is_empty() {
            return Err(StoreError::validation("spanish is required"));
        }
        Ok(Word {
            english: self.english,
            spanish: self.spanish,
            synonyms: self.synonyms,
            examples: self.examples,
        })
    }
}

/// The vocabulary store over a persistence adapter.
#[derive(Debug)]
pub struct VocabularyStore<A: PersistenceAdapter = JsonFileAdapter> {
    adapter: A,
    gate: Mutex<()>,
}

impl VocabularyStore<JsonFileAdapter> {
    /// Open a store backed by a JSON file, creating it if missing.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Result<Self, StoreError> {
        let adapter = JsonFileAdapter::new(path);
        adapter.initialize()?;
        Ok(Self::new(adapter))
    }
}

impl<A: PersistenceAdapter> VocabularyStore<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            gate: Mutex::new(()),
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Run one read-modify-write cycle under the gate.
    ///
    /// `apply` returns `Ok(Some(_))` when the collection changed and must be
    /// saved, `Ok(None)` for a no-op.
    fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Collection) -> Result<Option<T>, StoreError>,
    ) -> Result<Option<T>, StoreError> {
        let _guard = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        let mut collection = self.adapter.load()?;
        let outcome = apply(&mut collection)?;
        if outcome.is_some() {
            self.adapter.save(&collection)?;
        }
        Ok(outcome)
    }

    /// Run one read-modify-write cycle under the gate and always save.
    fn modify<T>(
        &self,
        apply: impl FnOnce(&mut Collection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _guard = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        let mut collection = self.adapter.load()?;
        let value = apply(&mut collection)?;
        self.adapter.save(&collection)?;
        Ok(value)
    }

    /// Full snapshot of the collection.
    pub fn list_categories(&self) -> Result<Collection, StoreError> {
        let _guard = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        self.adapter.load()
    }

    /// Create an empty category at the end of the current ordering.
    pub fn create_category(&self, name: &str, color: Option<&str>) -> Result<Category, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::validation("category name is required"));
        }
        let color = color
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_COLOR);

        let created = self.modify(|collection| {
            if collection.contains(name) {
                return Err(StoreError::duplicate_name(name));
            }
            let category = Category::new(color, collection.len() as u32);
            collection.insert(name, category.clone());
            Ok(category)
        })?;

        log::debug!("Created category '{}'", name);
        Ok(created)
    }

    /// Move a category to a new name, keeping its words, color and order.
    pub fn rename_category(&self, old_name: &str, new_name: &str) -> Result<(), StoreError> {
        self.mutate(|collection| {
            if !collection.contains(old_name) {
                return Err(StoreError::category_not_found(old_name));
            }
            if new_name.is_empty() || new_name == old_name {
                return Ok(None);
            }
            if collection.contains(new_name) {
                return Err(StoreError::duplicate_name(new_name));
            }
            let category = collection
                .remove(old_name)
                .ok_or_else(|| StoreError::category_not_found(old_name))?;
            collection.insert(new_name, category);
            Ok(Some(()))
        })?;

        log::debug!("Renamed category '{}' to '{}'", old_name, new_name);
        Ok(())
    }

    /// Replace a category's color.
    pub fn recolor_category(&self, name: &str, color: &str) -> Result<(), StoreError> {
        self.modify(|collection| {
            let category = collection
                .get_mut(name)
                .ok_or_else(|| StoreError::category_not_found(name))?;
            category.color = color.to_string();
            Ok(())
        })?;

        log::debug!("Recolored category '{}' to {}", name, color);
        Ok(())
    }

    /// Rename and/or recolor in one call. The rename is applied first.
    pub fn update_category(
        &self,
        name: &str,
        new_name: Option<&str>,
        color: Option<&str>,
    ) -> Result<(), StoreError> {
        self.mutate(|collection| {
            if !collection.contains(name) {
                return Err(StoreError::category_not_found(name));
            }
            let target = match new_name {
                Some(new_name) if !new_name.is_empty() && new_name != name => {
                    if collection.contains(new_name) {
                        return Err(StoreError::duplicate_name(new_name));
                    }
                    new_name
                }
                _ => name,
            };
            if target == name && color.is_none() {
                return Ok(None);
            }

            let mut category = collection
                .remove(name)
                .ok_or_else(|| StoreError::category_not_found(name))?;
            if let Some(color) = color {
                category.color = color.to_string();
            }
            collection.insert(target, category);
            Ok(Some(()))
        })?;
        Ok(())
    }

    /// Remove a category and all of its words. Missing names are a no-op.
    pub fn delete_category(&self, name: &str) -> Result<(), StoreError> {
        let removed = self.mutate(|collection| Ok(collection.remove(name)))?;
        if let Some(category) = removed {
            log::debug!(
                "Deleted category '{}' with {} words",
                name,
                category.len()
            );
        }
        Ok(())
    }

    /// Assign each listed, existing category its index in `ordered_names`.
    ///
    /// Unknown names are ignored. Categories not listed keep their order.
    pub fn reorder_categories<S: AsRef<str>>(&self, ordered_names: &[S]) -> Result<(), StoreError> {
        self.modify(|collection| {
            for (index, name) in ordered_names.iter().enumerate() {
                if let Some(category) = collection.get_mut(name.as_ref()) {
                    category.order = index as u32;
                }
            }
            Ok(())
        })?;

        log::debug!("Reordered {} categories", ordered_names.len());
        Ok(())
    }

    /// Append a word to a category.
    pub fn add_word(&self, category: &str, input: WordInput) -> Result<(), StoreError> {
        let word = input.into_word()?;
        self.modify(|collection| {
            let target = collection
                .get_mut(category)
                .ok_or_else(|| StoreError::category_not_found(category))?;
            target.words.push(word);
            Ok(())
        })?;

        log::debug!("Added word to category '{}'", category);
        Ok(())
    }

    /// Replace the word at `index` in place.
    pub fn update_word(&self, category: &str, index: usize, input: WordInput) -> Result<(), StoreError> {
        let word = input.into_word()?;
        self.modify(|collection| {
            let target = collection
                .get_mut(category)
                .ok_or_else(|| StoreError::category_not_found(category))?;
            let slot = target
                .words
                .get_mut(index)
                .ok_or_else(|| StoreError::word_not_found(category, index))?;
            *slot = word;
            Ok(())
        })?;

        log::debug!("Updated word {} in category '{}'", index, category);
        Ok(())
    }

    /// Remove the word at `index`; later words shift down by one.
    pub fn delete_word(&self, category: &str, index: usize) -> Result<(), StoreError> {
        self.modify(|collection| {
            let target = collection
                .get_mut(category)
                .ok_or_else(|| StoreError::category_not_found(category))?;
            if index >= target.words.len() {
                return Err(StoreError::word_not_found(category, index));
            }
            target.words.remove(index);
            Ok(())
        })?;

        log::debug!("Deleted word {} from category '{}'", index, category);
        Ok(())
    }
}
