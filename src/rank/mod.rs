//! Sentence ranking engines.
//!
//! Three interchangeable strategies score the sentences of a document;
//! callers get the top-scoring subset back in document order.

mod centrality;
mod frequency;
mod latent;

pub use centrality::CentralityRanker;
pub use frequency::FrequencyRanker;
pub use latent::LatentTopicRanker;

use std::collections::HashMap;

use anyhow::Result;
use clap::ValueEnum;

use crate::transcript::{Document, Sentence};

/// Ranking strategy selector for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Similarity-graph centrality
    Centrality,
    /// Latent-topic decomposition
    Latent,
    /// Keyword-frequency significance
    Frequency,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Centrality => "centrality",
            Engine::Latent => "latent",
            Engine::Frequency => "frequency",
        }
    }
}

pub trait SentenceRanker: Send + Sync {
    /// Score every sentence and return the `count` best, in document
    /// order. Asking for more sentences than exist returns them all.
    fn rank(&self, document: &Document, count: usize) -> Vec<Sentence>;
}

/// Build a ranking engine from its configured name.
pub fn build_ranker(engine: &str) -> Result<Box<dyn SentenceRanker>> {
    match engine.trim().to_lowercase().as_str() {
        "centrality" => Ok(Box::new(CentralityRanker::default())),
        "latent" => Ok(Box::new(LatentTopicRanker::default())),
        "frequency" => Ok(Box::new(FrequencyRanker::default())),
        other => anyhow::bail!(
            "Unsupported summary.engine '{}'. Supported engines: centrality, latent, frequency",
            other
        ),
    }
}

/// Select the `count` highest-scoring sentences, breaking ties by
/// position, and return them in document order.
fn select_top(document: &Document, scores: &[f64], count: usize) -> Vec<Sentence> {
    let mut order: Vec<usize> = (0..document.sentences.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    order.truncate(count);
    order.sort_unstable();

    order
        .into_iter()
        .map(|i| document.sentences[i].clone())
        .collect()
}

/// Term counts over a sentence's stems.
fn term_counts(stems: &[String]) -> HashMap<&str, f64> {
    let mut counts = HashMap::new();
    for stem in stems {
        *counts.entry(stem.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Sparse dot product of two term-count vectors.
fn dot(a: &HashMap<&str, f64>, b: &HashMap<&str, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(texts: &[&str]) -> Document {
        Document {
            sentences: texts
                .iter()
                .enumerate()
                .map(|(index, text)| Sentence {
                    index,
                    text: text.to_string(),
                    stems: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn select_top_returns_document_order() {
        let document = doc(&["a", "b", "c", "d"]);
        let selected = select_top(&document, &[0.1, 0.9, 0.2, 0.8], 2);

        let texts: Vec<&str> = selected.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "d"]);
    }

    #[test]
    fn select_top_breaks_ties_by_position() {
        let document = doc(&["a", "b", "c"]);
        let selected = select_top(&document, &[0.5, 0.5, 0.5], 2);

        let texts: Vec<&str> = selected.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn select_top_caps_at_available_sentences() {
        let document = doc(&["a", "b"]);
        assert_eq!(select_top(&document, &[1.0, 2.0], 10).len(), 2);
    }

    #[test]
    fn build_ranker_rejects_unknown_engine() {
        let err = match build_ranker("pagerank2000") {
            Ok(_) => panic!("expected engine creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported summary.engine"));
    }

    #[test]
    fn build_ranker_accepts_known_engines() {
        for name in ["centrality", "Latent", " frequency "] {
            assert!(build_ranker(name).is_ok(), "engine {:?} should build", name);
        }
    }
}
