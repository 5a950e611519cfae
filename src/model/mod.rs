//! Vocabulary data model: words, categories and the collection that owns them.
//!
//! The persisted shape is a map from category name to category, so the name
//! lives in the map key rather than inside [`Category`].

mod category;
mod collection;
mod word;

pub use category::{Category, DEFAULT_COLOR};
pub use collection::Collection;
pub use word::Word;
