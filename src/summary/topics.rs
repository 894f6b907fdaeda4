//! Discussion-topic identification.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rank::{LatentTopicRanker, SentenceRanker};
use crate::transcript::Document;

static TOPIC_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Agenda Item|Topic|Section)[\s\d]*:?\s*([^\r\n]*)").unwrap()
});

/// How many ranked sentences the synthesis fallback considers.
const FALLBACK_RANK_COUNT: usize = 5;
/// Cap on synthesized topics. Explicit agenda markers are not capped
/// here; the assembler limits how many it renders.
const MAX_SYNTHESIZED_TOPICS: usize = 3;

/// Identify discussion topics.
///
/// Explicit agenda markers in the raw transcript win. Without any, the
/// latent-topic engine picks the most thematic sentences and the first
/// three words of each become a topic label. Sentences of three words
/// or fewer yield no label.
pub(crate) fn extract_topics(raw: &str, document: &Document) -> Vec<String> {
    let explicit: Vec<String> = TOPIC_MARKER
        .captures_iter(raw)
        .map(|caps| caps[1].trim().to_string())
        .collect();
    if !explicit.is_empty() {
        return explicit;
    }

    let ranked = LatentTopicRanker::default().rank(document, FALLBACK_RANK_COUNT);
    let mut topics = Vec::new();
    for sentence in &ranked {
        let words: Vec<&str> = sentence.text.split_whitespace().collect();
        if words.len() > 3 {
            topics.push(format!("{}...", words[..3].join(" ")));
        }
        if topics.len() == MAX_SYNTHESIZED_TOPICS {
            break;
        }
    }
    topics
}
