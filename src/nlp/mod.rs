//! Language-aware text processing for recap
//!
//! Sentence segmentation, word tokenization, stopword filtering, and
//! stemming for the supported transcript languages.

mod language;
mod tokenizer;

pub use language::Language;
pub use tokenizer::LanguageProfile;
