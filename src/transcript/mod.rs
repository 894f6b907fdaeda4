//! Transcript ingestion for recap
//!
//! Raw-text cleanup, header metadata extraction, and the sentence-level
//! document the ranking engines consume.

mod clean;
mod document;
mod metadata;

pub use clean::clean_transcript;
pub use document::{Document, Sentence};
pub use metadata::{extract_metadata, Metadata};
