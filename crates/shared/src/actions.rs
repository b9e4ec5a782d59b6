use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of action items either path returns.
pub const ACTION_LIMIT: usize = 5;

const ACTION_VERBS: &[&str] = &[
    "implement",
    "review",
    "analyze",
    "approve",
    "launch",
    "update",
    "finalize",
    "discuss",
    "assign",
    "schedule",
    "prepare",
    "confirm",
    "plan",
    "create",
    "deliver",
    "reallocate",
    "design",
    "develop",
    "submit",
];

// "action item(s)" with an optional ":" or "-"; the capture is bounded at
// the next sentence terminator so later unrelated sentences stay out of the
// final fragment.
static MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)action\s*items?[:\-]?\s*([^.!?]*)").unwrap());

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-•\n]+").unwrap());

/// Find candidate follow-up tasks in the segmented sentences.
///
/// When a delimited "action items" section exists its fragments win;
/// otherwise sentences mentioning one of the known action verbs are kept in
/// their original order. Either way the result is capped at
/// [`ACTION_LIMIT`]; an empty result is legal and the caller decides how to
/// render it.
pub fn extract_actions(sentences: &[String]) -> Vec<String> {
    let full_text = sentences.join(" ");

    if let Some(captures) = MARKER.captures(&full_text) {
        let section = captures.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        if !section.is_empty() {
            return BULLET
                .split(section)
                .map(|fragment| fragment.trim().trim_end_matches(['.', '!', '?']).trim_end())
                .filter(|fragment| fragment.len() > 5)
                .take(ACTION_LIMIT)
                .map(|fragment| fragment.to_string())
                .collect();
        }
    }

    sentences
        .iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            ACTION_VERBS.iter().any(|verb| lowered.contains(verb))
        })
        .take(ACTION_LIMIT)
        .cloned()
        .collect()
}
