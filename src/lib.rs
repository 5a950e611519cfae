//! vocab - Bilingual Vocabulary Manager
//!
//! Keeps an english/spanish vocabulary collection in a JSON store file,
//! grouped into colored, ordered categories. The collection can be exported
//! as a printable PDF that carries a complete copy of the data in its
//! metadata, and such a PDF (or a JSON file) can be imported back.
//!
//! - [`store`]: validated create/rename/recolor/reorder/delete operations
//! - [`format`]: PDF and JSON encoding and decoding
//! - [`import`]: best-effort merging of external data into a store

pub mod color_utils;
pub mod config;
pub mod constants;
pub mod format;
pub mod import;
pub mod model;
pub mod store;
