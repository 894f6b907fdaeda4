//! Supported transcript languages.

use clap::ValueEnum;
use rust_stemmers::Algorithm;
use stop_words::LANGUAGE;

/// Languages with stopword lists and stemmers available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    English,
    French,
    German,
    Spanish,
    Portuguese,
    Italian,
}

impl Language {
    /// Resolve a language name, falling back to English for anything unknown.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "fr" | "french" => Language::French,
            "de" | "german" => Language::German,
            "es" | "spanish" => Language::Spanish,
            "pt" | "portuguese" => Language::Portuguese,
            "it" | "italian" => Language::Italian,
            _ => Language::English,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Spanish => "spanish",
            Language::Portuguese => "portuguese",
            Language::Italian => "italian",
        }
    }

    pub(crate) fn stopword_language(&self) -> LANGUAGE {
        match self {
            Language::English => LANGUAGE::English,
            Language::French => LANGUAGE::French,
            Language::German => LANGUAGE::German,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Italian => LANGUAGE::Italian,
        }
    }

    pub(crate) fn stemmer_algorithm(&self) -> Algorithm {
        match self {
            Language::English => Algorithm::English,
            Language::French => Algorithm::French,
            Language::German => Algorithm::German,
            Language::Spanish => Algorithm::Spanish,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Italian => Algorithm::Italian,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names_and_codes() {
        assert_eq!(Language::from_name("german"), Language::German);
        assert_eq!(Language::from_name("PT"), Language::Portuguese);
        assert_eq!(Language::from_name("  italian "), Language::Italian);
    }

    #[test]
    fn unknown_names_fall_back_to_english() {
        assert_eq!(Language::from_name("klingon"), Language::English);
        assert_eq!(Language::from_name(""), Language::English);
    }
}
