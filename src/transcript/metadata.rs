//! Header metadata extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Metadata pulled from the top of a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub date: Option<String>,
    pub participants: Vec<String>,
}

static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Meeting\s+Title:?\s*([^\r\n]*)").unwrap());

static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Date:?\s*([^\r\n]*)").unwrap());

// The participant block runs until a blank line, a line starting with a
// capital letter or a timestamp bracket, or the end of input.
static PARTICIPANTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(?:Attendees|Participants):?\s*(.*?)(?:\n\n|\n[A-Z]|\n\[|$)").unwrap()
});

static PARTICIPANT_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,;]|\n").unwrap());

/// Extract title, date, and participants from the raw transcript header.
///
/// Matching is forgiving: the first hit wins and anything missing is left
/// at its default.
pub fn extract_metadata(transcript: &str) -> Metadata {
    let title = TITLE
        .captures(transcript)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| "Meeting Summary".to_string());

    let date = DATE
        .captures(transcript)
        .map(|c| c[1].trim().to_string());

    let participants = PARTICIPANTS
        .captures(transcript)
        .map(|c| {
            PARTICIPANT_SPLIT
                .split(&c[1])
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Metadata {
        title,
        date,
        participants,
    }
}
