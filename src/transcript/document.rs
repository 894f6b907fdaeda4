//! Sentence-level document model.

use crate::nlp::LanguageProfile;

/// A sentence with its tokenization and position in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
    /// Stems of the non-stopword words, used by the ranking engines.
    pub stems: Vec<String>,
}

/// Ordered sentences of a cleaned transcript.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Tokenize cleaned text into sentences with their content stems.
    pub fn build(text: &str, profile: &LanguageProfile) -> Self {
        let sentences = profile
            .split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let stems = profile.content_stems(&text);
                Sentence { index, text, stems }
            })
            .collect();

        Self { sentences }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
