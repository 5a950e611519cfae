//! Tests for the vocabulary store operations.

use super::*;

fn memory_store() -> VocabularyStore<MemoryAdapter> {
    VocabularyStore::new(MemoryAdapter::new())
}

fn store_with_words(category: &str, words: &[(&str, &str)]) -> VocabularyStore<MemoryAdapter> {
    let store = memory_store();
    store.create_category(category, None).unwrap();
    for (english, spanish) in words {
        store
            .add_word(category, WordInput::new(*english, *spanish))
            .unwrap();
    }
    store
}

fn english_terms(store: &VocabularyStore<MemoryAdapter>, category: &str) -> Vec<String> {
    store
        .list_categories()
        .unwrap()
        .get(category)
        .unwrap()
        .words
        .iter()
        .map(|w| w.english.clone())
        .collect()
}

#[test]
fn test_create_category_appends_order() {
    let store = memory_store();
    let first = store.create_category("a", None).unwrap();
    let second = store.create_category("b", Some("#112233")).unwrap();

    assert_eq!(first.order, 0);
    assert_eq!(first.color, DEFAULT_COLOR);
    assert_eq!(second.order, 1);
    assert_eq!(second.color, "#112233");
}

#[test]
fn test_create_category_returns_the_stored_category() {
    let store = memory_store();
    store.create_category("a", None).unwrap();
    let created = store.create_category("b", Some("#445566")).unwrap();

    assert_eq!(store.adapter().save_count(), 2);
    assert_eq!(store.list_categories().unwrap().get("b"), Some(&created));
}

#[test]
fn test_create_duplicate_leaves_collection_unchanged() {
    let store = memory_store();
    store.create_category("Animals", Some("#ff0000")).unwrap();
    let before = store.list_categories().unwrap();
    let saves = store.adapter().save_count();

    let err = store.create_category("Animals", Some("#00ff00")).unwrap_err();
    assert!(err.is_duplicate_name());
    assert_eq!(store.list_categories().unwrap(), before);
    assert_eq!(store.adapter().save_count(), saves);
}

#[test]
fn test_create_blank_name_rejected() {
    let store = memory_store();
    assert!(store.create_category("", None).unwrap_err().is_validation());
    assert!(store.create_category("   ", None).unwrap_err().is_validation());
    assert!(store.list_categories().unwrap().is_empty());
}

#[test]
fn test_names_are_case_sensitive() {
    let store = memory_store();
    store.create_category("food", None).unwrap();
    store.create_category("Food", None).unwrap();
    assert_eq!(store.list_categories().unwrap().len(), 2);
}

#[test]
fn test_rename_preserves_contents() {
    let store = store_with_words("Old", &[("cat", "gato")]);
    store.recolor_category("Old", "#abcdef").unwrap();
    let before = store.list_categories().unwrap().get("Old").cloned().unwrap();

    store.rename_category("Old", "New").unwrap();

    let after = store.list_categories().unwrap();
    assert!(!after.contains("Old"));
    assert_eq!(after.get("New"), Some(&before));
}

#[test]
fn test_rename_to_existing_fails() {
    let store = memory_store();
    store.create_category("a", None).unwrap();
    store.create_category("b", None).unwrap();

    assert!(store.rename_category("a", "b").unwrap_err().is_duplicate_name());
    let collection = store.list_categories().unwrap();
    assert!(collection.contains("a"));
    assert!(collection.contains("b"));
}

#[test]
fn test_rename_noop_and_missing() {
    let store = memory_store();
    store.create_category("a", None).unwrap();
    let saves = store.adapter().save_count();

    store.rename_category("a", "a").unwrap();
    store.rename_category("a", "").unwrap();
    assert_eq!(store.adapter().save_count(), saves);

    assert!(store.rename_category("missing", "x").unwrap_err().is_not_found());
}

#[test]
fn test_recolor_missing_category() {
    let store = memory_store();
    assert!(store.recolor_category("nope", "#000000").unwrap_err().is_not_found());
}

#[test]
fn test_update_category_renames_then_recolors() {
    let store = store_with_words("a", &[("one", "uno")]);
    store.update_category("a", Some("b"), Some("#010203")).unwrap();

    let collection = store.list_categories().unwrap();
    let category = collection.get("b").unwrap();
    assert_eq!(category.color, "#010203");
    assert_eq!(category.len(), 1);
    assert!(!collection.contains("a"));
}

#[test]
fn test_delete_category_removes_words() {
    let store = store_with_words("Animals", &[("cat", "gato"), ("dog", "perro"), ("cow", "vaca")]);
    store.create_category("Food", None).unwrap();

    store.delete_category("Animals").unwrap();

    let collection = store.list_categories().unwrap();
    assert!(!collection.contains("Animals"));
    assert_eq!(collection.total_words(), 0);
    assert!(collection.names().all(|n| n != "Animals"));
}

#[test]
fn test_delete_missing_category_is_noop() {
    let store = memory_store();
    store.delete_category("ghost").unwrap();
    store.delete_category("ghost").unwrap();
    assert_eq!(store.adapter().save_count(), 0);
}

#[test]
fn test_reorder_swaps_two_categories() {
    let store = memory_store();
    store.create_category("a", None).unwrap();
    store.create_category("b", None).unwrap();

    store.reorder_categories(&["b", "a"]).unwrap();

    let collection = store.list_categories().unwrap();
    assert_eq!(collection.get("b").unwrap().order, 0);
    assert_eq!(collection.get("a").unwrap().order, 1);
}

#[test]
fn test_partial_reorder_keeps_unlisted_orders() {
    let store = memory_store();
    store.create_category("a", None).unwrap();
    store.create_category("b", None).unwrap();
    store.create_category("c", None).unwrap();

    store.reorder_categories(&["c", "unknown", "a"]).unwrap();

    let collection = store.list_categories().unwrap();
    assert_eq!(collection.get("c").unwrap().order, 0);
    assert_eq!(collection.get("a").unwrap().order, 2);
    assert_eq!(collection.get("b").unwrap().order, 1);
    assert!(!collection.contains("unknown"));
}

#[test]
fn test_add_word_validation_and_missing_category() {
    let store = memory_store();
    store.create_category("a", None).unwrap();

    let err = store.add_word("a", WordInput::new("", "uno")).unwrap_err();
    assert!(err.is_validation());
    let err = store.add_word("a", WordInput::new("one", "")).unwrap_err();
    assert!(err.is_validation());
    let err = store.add_word("b", WordInput::new("one", "uno")).unwrap_err();
    assert!(err.is_not_found());

    assert!(store.list_categories().unwrap().get("a").unwrap().is_empty());
}

#[test]
fn test_add_word_keeps_synonyms_and_examples() {
    let store = memory_store();
    store.create_category("a", None).unwrap();
    store
        .add_word(
            "a",
            WordInput::new("big", "grande")
                .synonyms(vec!["large".into()])
                .examples(vec!["A big house".into()]),
        )
        .unwrap();

    let collection = store.list_categories().unwrap();
    let word = &collection.get("a").unwrap().words[0];
    assert_eq!(word.synonyms, vec!["large"]);
    assert_eq!(word.examples, vec!["A big house"]);
}

#[test]
fn test_update_word_changes_only_target_index() {
    let store = store_with_words("n", &[("one", "uno"), ("two", "dos"), ("three", "tres")]);
    let before = store.list_categories().unwrap().get("n").cloned().unwrap();

    store.update_word("n", 1, WordInput::new("TWO", "DOS")).unwrap();

    let after = store.list_categories().unwrap().get("n").cloned().unwrap();
    assert_eq!(after.len(), before.len());
    assert_eq!(after.words[0], before.words[0]);
    assert_eq!(after.words[2], before.words[2]);
    assert_eq!(after.words[1].english, "TWO");
    assert_eq!(after.words[1].spanish, "DOS");
}

#[test]
fn test_update_word_out_of_range() {
    let store = store_with_words("n", &[("one", "uno")]);
    assert!(store.update_word("n", 1, WordInput::new("x", "y")).unwrap_err().is_not_found());
    assert!(store.update_word("m", 0, WordInput::new("x", "y")).unwrap_err().is_not_found());
}

#[test]
fn test_update_word_rejects_blank_terms() {
    let store = store_with_words("n", &[("one", "uno")]);
    let before = store.list_categories().unwrap();
    let saves = store.adapter().save_count();

    let err = store.update_word("n", 0, WordInput::new("  ", "dos")).unwrap_err();
    assert!(err.is_validation());
    let err = store.update_word("n", 0, WordInput::new("two", "")).unwrap_err();
    assert!(err.is_validation());

    assert_eq!(store.list_categories().unwrap(), before);
    assert_eq!(store.adapter().save_count(), saves);
}

#[test]
fn test_delete_word_shifts_later_words() {
    let store = store_with_words("n", &[("one", "uno"), ("two", "dos"), ("three", "tres")]);

    store.delete_word("n", 0).unwrap();
    assert_eq!(english_terms(&store, "n"), vec!["two", "three"]);

    // Index 0 now addresses the former index 1.
    store.delete_word("n", 0).unwrap();
    assert_eq!(english_terms(&store, "n"), vec!["three"]);

    store.delete_word("n", 0).unwrap();
    assert!(store.delete_word("n", 0).unwrap_err().is_not_found());
    assert!(english_terms(&store, "n").is_empty());
}

#[test]
fn test_delete_word_missing_category() {
    let store = memory_store();
    assert!(store.delete_word("nope", 0).unwrap_err().is_not_found());
}

#[test]
fn test_file_store_persists_every_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.json");

    {
        let store = VocabularyStore::open(&path).unwrap();
        store.create_category("Animals", Some("#ff0000")).unwrap();
        store.add_word("Animals", WordInput::new("cat", "gato")).unwrap();
    }

    // A fresh store sees only what is on disk.
    let reopened = VocabularyStore::open(&path).unwrap();
    let collection = reopened.list_categories().unwrap();
    let animals = collection.get("Animals").unwrap();
    assert_eq!(animals.color, "#ff0000");
    assert_eq!(animals.words[0].spanish, "gato");
}

#[test]
fn test_concurrent_adds_are_not_lost() {
    use std::sync::Arc;
    use std::thread;

    let store = Arc::new(memory_store());
    store.create_category("n", None).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for j in 0..10 {
                    store
                        .add_word("n", WordInput::new(format!("w{i}-{j}"), "x"))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.list_categories().unwrap().get("n").unwrap().len(), 80);
}
