//! Sentence and word tokenization.

use std::collections::HashSet;

use rust_stemmers::Stemmer;

use crate::nlp::Language;

/// Per-language tokenization state, built once per summarizer.
///
/// Bundles the stopword set, the Snowball stemmer, and the abbreviation
/// list that guards sentence splitting.
pub struct LanguageProfile {
    stopwords: HashSet<String>,
    stemmer: Stemmer,
    abbreviations: HashSet<&'static str>,
}

impl LanguageProfile {
    pub fn new(language: Language) -> Self {
        let stopwords = stop_words::get(language.stopword_language())
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();

        Self {
            stopwords,
            stemmer: Stemmer::create(language.stemmer_algorithm()),
            abbreviations: abbreviations(language).iter().copied().collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }

    /// Split text into sentences on terminal punctuation, keeping known
    /// abbreviations and initials inside their sentence.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            current.push(c);

            if matches!(c, '.' | '!' | '?') {
                // Trailing quotes and brackets belong to the sentence.
                while i + 1 < chars.len() && matches!(chars[i + 1], '"' | '\'' | ')' | ']') {
                    i += 1;
                    current.push(chars[i]);
                }

                let at_end = i + 1 >= chars.len();
                let boundary = (at_end || chars[i + 1].is_whitespace())
                    && !self.ends_with_abbreviation(&current);

                if boundary {
                    let sentence = current.trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence.to_string());
                    }
                    current.clear();
                }
            }

            i += 1;
        }

        let tail = current.trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }

    /// Lowercased alphanumeric word tokens.
    pub fn words(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(|word| word.to_lowercase())
            .collect()
    }

    /// Stems of the non-stopword tokens of `text`.
    pub fn content_stems(&self, text: &str) -> Vec<String> {
        self.words(text)
            .into_iter()
            .filter(|word| !self.is_stopword(word))
            .map(|word| self.stem(&word))
            .collect()
    }

    fn ends_with_abbreviation(&self, fragment: &str) -> bool {
        let last = match fragment.split_whitespace().last() {
            Some(token) => token.trim_end_matches(|c: char| matches!(c, '"' | '\'' | ')' | ']')),
            None => return false,
        };
        if !last.ends_with('.') {
            return false;
        }

        let token = last.to_lowercase();
        if self.abbreviations.contains(token.as_str()) {
            return true;
        }

        // Initials like "J." and dotted forms like "e.g." stay inside
        // the sentence.
        let bare = token.trim_end_matches('.');
        bare.chars().count() == 1 || bare.contains('.')
    }
}

fn abbreviations(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[
            "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "vs.", "etc.", "approx.",
            "dept.", "inc.", "corp.",
        ],
        Language::French => &["m.", "mme.", "mlle.", "dr.", "etc.", "env.", "av."],
        Language::German => &["dr.", "prof.", "hr.", "nr.", "ca.", "usw.", "bzw."],
        Language::Spanish => &["sr.", "sra.", "srta.", "dr.", "dra.", "etc.", "aprox."],
        Language::Portuguese => &["sr.", "sra.", "dr.", "dra.", "prof.", "etc.", "aprox."],
        Language::Italian => &["sig.", "dott.", "prof.", "ecc.", "ca.", "ing."],
    }
}
