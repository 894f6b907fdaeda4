//! Markdown summary assembly.
//!
//! Pure string composition over the extracted pieces. The layout is
//! fixed: title, optional header lines, then the three numbered
//! sections.

use crate::transcript::{Metadata, Sentence};

const MAX_PARTICIPANTS: usize = 5;
const MAX_OVERVIEW_SENTENCES: usize = 3;
const MAX_TOPICS: usize = 5;
const MAX_RELATED_SENTENCES: usize = 2;
/// Topic words at or below this length are ignored when matching
/// sentences to a topic.
const MIN_TOPIC_WORD_CHARS: usize = 3;

/// Render the final Markdown summary. Blocks are separated by one
/// blank line.
pub(crate) fn assemble_summary(
    metadata: &Metadata,
    sentences: &[Sentence],
    topics: &[String],
    action_items: &[String],
) -> String {
    let mut parts = vec![format!("# {}", metadata.title)];

    if let Some(date) = &metadata.date {
        parts.push(format!("Date: {}", date));
    }

    if !metadata.participants.is_empty() {
        parts.push(format!("Participants: {}", participant_line(metadata)));
    }

    parts.push("## 1. Overview".to_string());
    let overview: Vec<&str> = sentences
        .iter()
        .take(MAX_OVERVIEW_SENTENCES)
        .map(|s| s.text.as_str())
        .collect();
    parts.push(overview.join(" "));

    parts.push("## 2. Key Discussion Points".to_string());
    for (i, topic) in topics.iter().take(MAX_TOPICS).enumerate() {
        let related = related_sentences(topic, sentences);
        if !related.is_empty() {
            let shown = related[..related.len().min(MAX_RELATED_SENTENCES)].join(" ");
            parts.push(format!("- **{}**: {}", topic, shown));
        } else if i < sentences.len() {
            parts.push(format!("- **{}**: {}", topic, sentences[i].text));
        }
    }

    parts.push("## 3. Action Items".to_string());
    if action_items.is_empty() {
        parts.push("No specific action items identified.".to_string());
    } else {
        for item in action_items {
            parts.push(format!("- {}", item));
        }
    }

    parts.join("\n\n")
}

fn participant_line(metadata: &Metadata) -> String {
    let shown = metadata.participants.len().min(MAX_PARTICIPANTS);
    let mut line = metadata.participants[..shown].join(", ");
    if metadata.participants.len() > MAX_PARTICIPANTS {
        line.push_str(&format!(
            " and {} others",
            metadata.participants.len() - MAX_PARTICIPANTS
        ));
    }
    line
}

/// Summary sentences containing any topic word longer than three
/// characters, case-insensitively.
fn related_sentences<'a>(topic: &str, sentences: &'a [Sentence]) -> Vec<&'a str> {
    let words: Vec<String> = topic
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_TOPIC_WORD_CHARS)
        .map(|word| word.to_lowercase())
        .collect();
    if words.is_empty() {
        return Vec::new();
    }

    sentences
        .iter()
        .filter(|sentence| {
            let lower = sentence.text.to_lowercase();
            words.iter().any(|word| lower.contains(word.as_str()))
        })
        .map(|sentence| sentence.text.as_str())
        .collect()
}
