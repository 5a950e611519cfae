//! The full set of categories, keyed by name.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use super::Category;

/// Mapping from category name to category; the unit of persistence and export.
///
/// Backed by a `BTreeMap`, so iteration is in lexical name order. That order
/// is also the tie-break when two categories share the same `order` value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    categories: BTreeMap<String, Category>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.get_mut(name)
    }

    /// Insert a category, returning the one previously stored under `name`.
    pub fn insert(&mut self, name: impl Into<String>, category: Category) -> Option<Category> {
        self.categories.insert(name.into(), category)
    }

    pub fn remove(&mut self, name: &str) -> Option<Category> {
        self.categories.remove(name)
    }

    /// Iterate in key (lexical) order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Category> {
        self.categories.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Categories in canonical display order: ascending `order`, ties broken
    /// by name.
    pub fn sorted(&self) -> Vec<(&str, &Category)> {
        let mut entries: Vec<_> = self
            .categories
            .iter()
            .map(|(name, category)| (name.as_str(), category))
            .collect();
        // Stable sort over lexical iteration keeps the name tie-break.
        entries.sort_by_key(|(_, category)| category.order);
        entries
    }

    /// Total number of words across all categories.
    pub fn total_words(&self) -> usize {
        self.categories.values().map(Category::len).sum()
    }
}

impl FromIterator<(String, Category)> for Collection {
    fn from_iter<I: IntoIterator<Item = (String, Category)>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a String, &'a Category);
    type IntoIter = btree_map::Iter<'a, String, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Word;

    #[test]
    fn test_sorted_by_order_then_name() {
        let mut collection = Collection::new();
        collection.insert("zebra", Category::new("#000000", 0));
        collection.insert("apple", Category::new("#000000", 1));
        collection.insert("mango", Category::new("#000000", 0));

        let names: Vec<_> = collection.sorted().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["mango", "zebra", "apple"]);
    }

    #[test]
    fn test_total_words() {
        let mut collection = Collection::new();
        collection.insert(
            "Animals",
            Category::default().with_words(vec![Word::new("cat", "gato"), Word::new("dog", "perro")]),
        );
        collection.insert("Empty", Category::default());
        assert_eq!(collection.total_words(), 2);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut collection = Collection::new();
        collection.insert("Animals", Category::new("#ff0000", 3));
        let json = serde_json::to_string(&collection).unwrap();
        assert_eq!(
            json,
            r##"{"Animals":{"words":[],"color":"#ff0000","order":3}}"##
        );
    }
}
