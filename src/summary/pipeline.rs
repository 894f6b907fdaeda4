//! The summarizer itself.

use anyhow::Result;
use tracing::debug;

use crate::nlp::{Language, LanguageProfile};
use crate::rank::{build_ranker, SentenceRanker};
use crate::summary::actions::detect_action_items;
use crate::summary::assemble::assemble_summary;
use crate::summary::topics::extract_topics;
use crate::transcript::{clean_transcript, extract_metadata, Document};

/// Floor on how many sentences are requested from the ranking engine.
const MIN_SENTENCES: usize = 5;

/// Extractive meeting summarizer for one language and ranking engine.
///
/// Stopwords and the stemmer are built once at construction and shared
/// across calls; `summarize` itself holds no mutable state.
pub struct Summarizer {
    profile: LanguageProfile,
    ranker: Box<dyn SentenceRanker>,
}

impl Summarizer {
    pub fn new(language: Language, engine: &str) -> Result<Self> {
        Ok(Self {
            profile: LanguageProfile::new(language),
            ranker: build_ranker(engine)?,
        })
    }

    /// Summarize a raw transcript into the three-section Markdown
    /// layout. `ratio` scales how many sentences survive ranking.
    pub fn summarize(&self, transcript: &str, ratio: f64) -> String {
        let metadata = extract_metadata(transcript);
        let cleaned = clean_transcript(transcript);
        let document = Document::build(&cleaned, &self.profile);

        let target = sentence_target(document.len(), ratio);
        debug!(
            "ranking {} sentences, keeping up to {}",
            document.len(),
            target
        );
        let selected = self.ranker.rank(&document, target);

        let topics = extract_topics(transcript, &document);
        let action_items = detect_action_items(&selected);

        assemble_summary(&metadata, &selected, &topics, &action_items)
    }
}

fn sentence_target(total: usize, ratio: f64) -> usize {
    MIN_SENTENCES.max((total as f64 * ratio) as usize)
}
