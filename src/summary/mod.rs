//! Extractive summarization pipeline.
//!
//! Ties the transcript, nlp, and rank modules together and renders the
//! final Markdown summary.

mod actions;
mod assemble;
mod pipeline;
mod topics;

pub use pipeline::Summarizer;
