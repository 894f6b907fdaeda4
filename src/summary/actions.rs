//! Action-item detection.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::transcript::Sentence;

/// Keywords that mark a sentence as a commitment, task, or deadline.
const ACTION_KEYWORDS: [&str; 15] = [
    "will",
    "should",
    "need to",
    "needs to",
    "going to",
    "have to",
    "must",
    "assigned",
    "task",
    "action",
    "follow up",
    "follow-up",
    "todo",
    "to-do",
    "deadline",
];

// One or two capitalized words directly before a commitment verb.
static RESPONSIBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?) (?:will|should|needs to|is going to)").unwrap()
});

/// Pick the action items out of the summary sentences, in order.
///
/// A sentence qualifies if its lowercased text contains any action
/// keyword. When a responsible party can be spotted, their name is
/// bolded in the emitted item; otherwise the sentence passes through
/// verbatim.
pub(crate) fn detect_action_items(sentences: &[Sentence]) -> Vec<String> {
    let mut items = Vec::new();
    for sentence in sentences {
        let lower = sentence.text.to_lowercase();
        if !ACTION_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
            continue;
        }

        let item = match RESPONSIBLE.captures(&sentence.text) {
            Some(caps) => {
                let person = &caps[1];
                sentence
                    .text
                    .replacen(person, &format!("**{}**", person), 1)
            }
            None => sentence.text.clone(),
        };
        items.push(item);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| Sentence {
                index,
                text: text.to_string(),
                stems: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn keyword_sentences_are_detected() {
        let items = detect_action_items(&sentences(&[
            "The weather was mild.",
            "Bob will send the report by Friday.",
            "There is a hard deadline next week.",
        ]));

        assert_eq!(items.len(), 2);
        assert!(items[1].contains("deadline"));
    }

    #[test]
    fn responsible_party_is_bolded() {
        let items = detect_action_items(&sentences(&["Bob will send the report by Friday."]));
        assert_eq!(items, vec!["**Bob** will send the report by Friday."]);
    }

    #[test]
    fn two_word_names_are_bolded_whole() {
        let items =
            detect_action_items(&sentences(&["Alice Johnson should draft the onboarding doc."]));
        assert_eq!(
            items,
            vec!["**Alice Johnson** should draft the onboarding doc."]
        );
    }

    #[test]
    fn keyword_without_owner_passes_verbatim() {
        let items = detect_action_items(&sentences(&["The task list keeps growing."]));
        assert_eq!(items, vec!["The task list keeps growing."]);
    }

    #[test]
    fn sentence_without_keywords_never_appears() {
        assert!(detect_action_items(&sentences(&["We chatted about lunch."])).is_empty());
    }

    #[test]
    fn order_is_preserved_without_dedup() {
        let items = detect_action_items(&sentences(&[
            "Carol must update the runbook.",
            "Carol must update the runbook.",
        ]));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], items[1]);
    }
}
