//! Merging an import payload into a live store.

use crate::import::payload::{ImportPayload, ImportedCategory, PayloadEntry, RawWord};
use crate::store::{PersistenceAdapter, VocabularyStore, WordInput};

/// Aggregate outcome of one import.
///
/// `imported` and `errors` count words; the category counters are for
/// reporting only. Unrecognized or failed categories count as one error each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub errors: usize,
    pub categories_created: usize,
    pub categories_reused: usize,
    pub categories_skipped: usize,
}

/// Applies payloads to a store one operation at a time.
///
/// Each word is written by its own `add_word` call, so a failure partway
/// through leaves earlier words in place. When the payload names a category
/// that already exists, the existing category's color and order are kept.
pub struct Reconciler<'a, A: PersistenceAdapter> {
    store: &'a VocabularyStore<A>,
}

impl<'a, A: PersistenceAdapter> Reconciler<'a, A> {
    pub fn new(store: &'a VocabularyStore<A>) -> Self {
        Self { store }
    }

    /// Import every entry in input order.
    pub fn apply(&self, payload: &ImportPayload) -> ImportReport {
        let mut report = ImportReport::default();

        for entry in &payload.entries {
            match entry {
                PayloadEntry::Category(category) => self.apply_category(category, &mut report),
                PayloadEntry::Unrecognized { name } => {
                    log::warn!("Skipping category '{}': unrecognized shape", name);
                    report.errors += 1;
                }
            }
        }

        log::info!(
            "Import finished: {} words imported, {} errors",
            report.imported,
            report.errors
        );
        report
    }

    fn apply_category(&self, category: &ImportedCategory, report: &mut ImportReport) {
        if category.words.is_empty() {
            log::debug!("Skipping empty category '{}'", category.name);
            report.categories_skipped += 1;
            return;
        }

        match self
            .store
            .create_category(&category.name, Some(&category.color))
        {
            Ok(_) => report.categories_created += 1,
            Err(e) if e.is_duplicate_name() => {
                log::debug!("Category '{}' exists, adding to it", category.name);
                report.categories_reused += 1;
            }
            Err(e) => {
                log::warn!("Skipping category '{}': {}", category.name, e);
                report.errors += 1;
                return;
            }
        }

        for (index, raw) in category.words.iter().enumerate() {
            let Some(input) = word_input(raw) else {
                log::warn!(
                    "Skipping word {} in '{}': english and spanish are required",
                    index,
                    category.name
                );
                report.errors += 1;
                continue;
            };

            match self.store.add_word(&category.name, input) {
                Ok(()) => report.imported += 1,
                Err(e) => {
                    log::warn!("Skipping word {} in '{}': {}", index, category.name, e);
                    report.errors += 1;
                }
            }
        }
    }
}

/// Trimmed store input for a raw word, or None if a term is missing.
fn word_input(raw: &RawWord) -> Option<WordInput> {
    let english = raw.english.as_deref()?.trim();
    let spanish = raw.spanish.as_deref()?.trim();
    Some(
        WordInput::new(english, spanish)
            .synonyms(clean(&raw.synonyms))
            .examples(clean(&raw.examples)),
    )
}

fn clean(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
