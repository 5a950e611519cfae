//! Persistence adapters: load and save the whole collection as one blob.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::model::Collection;
use crate::store::error::StoreError;

/// Reads and writes the entire collection. No business logic lives here.
pub trait PersistenceAdapter: Send + Sync {
    /// Load the current collection.
    fn load(&self) -> Result<Collection, StoreError>;

    /// Replace the persisted collection wholesale.
    fn save(&self, collection: &Collection) -> Result<(), StoreError>;
}

/// On-disk layout of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    categories: Collection,
}

/// Stores the collection as pretty-printed JSON `{ "categories": { ... } }`.
#[derive(Debug, Clone)]
pub struct JsonFileAdapter {
    path: PathBuf,
}

impl JsonFileAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the empty store layout if no file exists yet.
    pub fn initialize(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            log::info!("Initializing empty vocabulary store at {:?}", self.path);
            self.write(&StoreFile::default())?;
        }
        Ok(())
    }

    /// Write to a sibling temp file, sync it, then rename over the target.
    fn write(&self, file: &StoreFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(file)?;
        let temp_path = self.path.with_extension("tmp");
        {
            let mut temp = File::create(&temp_path)?;
            temp.write_all(content.as_bytes())?;
            temp.sync_all()?;
        }

        fs::rename(&temp_path, &self.path).inspect_err(|_| {
            let _ = fs::remove_file(&temp_path);
        })?;
        Ok(())
    }
}

impl PersistenceAdapter for JsonFileAdapter {
    fn load(&self) -> Result<Collection, StoreError> {
        self.initialize()?;
        let content = fs::read_to_string(&self.path)?;
        let file: StoreFile = serde_json::from_str(&content)?;
        log::trace!(
            "Loaded {} categories from {:?}",
            file.categories.len(),
            self.path
        );
        Ok(file.categories)
    }

    fn save(&self, collection: &Collection) -> Result<(), StoreError> {
        let file = StoreFile {
            categories: collection.clone(),
        };
        self.write(&file)?;
        log::trace!("Persisted {} categories to {:?}", collection.len(), self.path);
        Ok(())
    }
}

/// Keeps the collection in memory. Useful for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    collection: Mutex<Collection>,
    saves: Mutex<usize>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection.
    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection: Mutex::new(collection),
            saves: Mutex::new(0),
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn load(&self) -> Result<Collection, StoreError> {
        Ok(self
            .collection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, collection: &Collection) -> Result<(), StoreError> {
        *self
            .collection
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = collection.clone();
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Word};

    #[test]
    fn test_missing_file_initialized_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.json");
        let adapter = JsonFileAdapter::new(&path);

        let collection = adapter.load().unwrap();
        assert!(collection.is_empty());

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!({ "categories": {} }));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFileAdapter::new(dir.path().join("nested").join("store.json"));

        let mut collection = Collection::new();
        collection.insert(
            "Food",
            Category::new("#ff8800", 2).with_words(vec![Word::new("bread", "pan")]),
        );
        adapter.save(&collection).unwrap();

        assert_eq!(adapter.load().unwrap(), collection);
        assert!(!adapter.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_store_file_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFileAdapter::new(dir.path().join("store.json"));
        adapter.save(&Collection::new()).unwrap();

        let content = std::fs::read_to_string(adapter.path()).unwrap();
        assert!(content.contains('\n'));
        assert!(content.contains("\"categories\""));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let adapter = JsonFileAdapter::new(&path);
        assert!(matches!(adapter.load(), Err(StoreError::Json(_))));
    }
}
