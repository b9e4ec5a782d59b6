use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Maximum number of sentences a digest keeps.
pub const DIGEST_LIMIT: usize = 5;

// Qualifying words are lowercase alphabetic runs of 3+ letters; digits,
// punctuation, and 1-2 letter words never score.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]{3,}\b").unwrap());

/// Count how often each qualifying word occurs across the whole document.
///
/// Matching is case-insensitive (the text is folded to lowercase first) and
/// counts are document-wide, not per sentence.
pub fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let lowered = text.to_lowercase();
    let mut frequencies = HashMap::new();
    for word in WORD.find_iter(&lowered) {
        *frequencies.entry(word.as_str().to_string()).or_insert(0) += 1;
    }
    frequencies
}

/// Pick the highest-scoring sentences, at most [`DIGEST_LIMIT`] of them.
///
/// A sentence scores the sum of the document-wide frequency of each of its
/// qualifying words, counted once per occurrence. The sort is stable, so
/// sentences with equal scores keep their original relative order.
pub fn rank_sentences(sentences: &[String], frequencies: &HashMap<String, usize>) -> Vec<String> {
    let mut scored: Vec<(usize, &String)> = sentences
        .iter()
        .map(|sentence| {
            let lowered = sentence.to_lowercase();
            let score = WORD
                .find_iter(&lowered)
                .map(|word| frequencies.get(word.as_str()).copied().unwrap_or(0))
                .sum();
            (score, sentence)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(DIGEST_LIMIT)
        .map(|(_, sentence)| sentence.clone())
        .collect()
}
