//! Fixed word tables used by the scorer.

use crate::types::Category;

/// Function words stripped from queries before token scoring: articles,
/// auxiliaries, pronouns, and WH-words.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "should", "could", "may", "might", "must", "can",
    "what", "where", "when", "why", "how", "who", "which", "i", "you", "he", "she", "it", "we",
    "they", "me", "him", "her", "us", "them", "this", "that", "these", "those",
];

/// Trigger word → category pairs. Each trigger present in the query adds a
/// flat bonus to records of the paired category, and triggers stack
/// independently.
pub const CATEGORY_TRIGGERS: &[(&str, Category)] = &[
    ("exam", Category::Exams),
    ("library", Category::Library),
    ("hostel", Category::Hostel),
    ("placement", Category::Placement),
    ("fee", Category::Administration),
    ("payment", Category::Administration),
    ("attendance", Category::Academics),
    ("wifi", Category::IT),
    ("internet", Category::IT),
    ("sport", Category::Sports),
    ("gym", Category::Sports),
];

/// Splits an already-normalized query on whitespace and keeps the tokens
/// worth scoring: longer than two characters and not a stop word.
pub fn significant_words(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !STOP_WORDS.contains(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_stop_words_are_dropped() {
        let words = significant_words("what is the library timing");
        assert_eq!(words, vec!["library", "timing"]);
    }

    #[test]
    fn empty_query_has_no_significant_words() {
        assert!(significant_words("").is_empty());
        assert!(significant_words("   ").is_empty());
    }

    #[test]
    fn non_stop_short_tokens_are_still_dropped() {
        // "id" is meaningful in this domain but falls under the length gate.
        let words = significant_words("how do i get my id card");
        assert_eq!(words, vec!["get", "card"]);
    }
}
