//! Raw transcript cleanup.

use once_cell::sync::Lazy;
use regex::Regex;

// Timestamp plus speaker tag, like "[10:15 AM] John Doe:"
static TIMESTAMP_SPEAKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\d{1,2}:\d{2}\s?(?:AM|PM|am|pm)?\]\s*[^:]+:").unwrap());

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

// Meeting system artifacts take the rest of their line with them.
static SYSTEM_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:Meeting started|Meeting ended|Recording started|Recording stopped).*").unwrap()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip timestamps, speaker tags, URLs, and meeting system artifacts,
/// then collapse all whitespace runs to single spaces.
pub fn clean_transcript(raw: &str) -> String {
    let cleaned = TIMESTAMP_SPEAKER.replace_all(raw, "");
    let cleaned = URL.replace_all(&cleaned, "");
    let cleaned = SYSTEM_MARKER.replace_all(&cleaned, "");
    let cleaned = WHITESPACE.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}
