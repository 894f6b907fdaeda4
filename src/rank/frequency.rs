//! Keyword-frequency sentence ranking.
//!
//! Scores each sentence by the summed document frequency of its content
//! stems, normalized against the most frequent stem.

use std::collections::HashMap;

use crate::transcript::{Document, Sentence};

use super::{select_top, SentenceRanker};

/// Frequency-significance ranking engine.
#[derive(Debug, Clone, Default)]
pub struct FrequencyRanker;

impl SentenceRanker for FrequencyRanker {
    fn rank(&self, document: &Document, count: usize) -> Vec<Sentence> {
        let n = document.sentences.len();
        if n == 0 || count == 0 {
            return Vec::new();
        }

        let mut frequencies: HashMap<&str, f64> = HashMap::new();
        for sentence in &document.sentences {
            for stem in &sentence.stems {
                *frequencies.entry(stem.as_str()).or_insert(0.0) += 1.0;
            }
        }

        let max_frequency = frequencies.values().fold(0.0_f64, |max, &f| max.max(f));
        if max_frequency == 0.0 {
            return select_top(document, &vec![0.0; n], count);
        }

        let scores: Vec<f64> = document
            .sentences
            .iter()
            .map(|sentence| {
                sentence
                    .stems
                    .iter()
                    .map(|stem| frequencies[stem.as_str()] / max_frequency)
                    .sum()
            })
            .collect();

        select_top(document, &scores, count)
    }
}
