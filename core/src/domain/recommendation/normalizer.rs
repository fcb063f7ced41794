use crate::domain::recommendation::value_objects::NormalizedQuery;

pub const STOP_WORDS: &[&str] = &[
    "i", "want", "to", "a", "an", "the", "food", "meal", "please", "with", "and", "or", "for",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.iter().any(|stop| stop.eq_ignore_ascii_case(word))
}

/// Normalize raw diner input. Returns `None` when nothing is left after trimming.
pub fn normalize(raw: &str) -> Option<NormalizedQuery> {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    let tokens: Vec<String> = text
        .split_whitespace()
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect();
    let cleaned = tokens.join(" ");

    Some(NormalizedQuery {
        text,
        tokens,
        cleaned,
    })
}
