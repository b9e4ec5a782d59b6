use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]").unwrap());

/// Split text into sentences.
///
/// Line breaks (CR, LF, CRLF) are normalized to single spaces first. A
/// sentence is a maximal run of characters ending in `.`, `!`, or `?`, with
/// the terminator retained; a trailing run with no terminator is dropped.
pub fn segment(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", " ").replace(['\r', '\n'], " ");

    SENTENCE
        .find_iter(&normalized)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
