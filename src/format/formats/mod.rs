//! Vocabulary format implementations.

mod json;
mod pdf;

#[cfg(test)]
mod tests;

pub use json::{JsonFormat, unwrap_categories};
pub use pdf::PdfFormat;
