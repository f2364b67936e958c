//! The relevance scorer: free-text query in, best-matching answer (or a
//! fallback) out.
//!
//! Scoring is a flat additive heuristic, deliberately so: the collection is
//! tens of records, every check is substring containment, and the whole pass
//! is O(records × tokens) with no state beyond the one counter the caller
//! applies afterwards.

use crate::fallback::{self, FallbackKind};
use crate::lexicon;
use crate::types::FaqRecord;


/// Minimum accumulated score required to accept a record as the answer.
/// Calibrated so one question-token hit plus a category bonus qualifies,
/// while a lone answer-body hit does not.
pub const MATCH_THRESHOLD: u32 = 3;

/// How many leading characters of a record's question participate in the
/// long-query containment check.
const QUESTION_PREFIX_CHARS: usize = 20;

const PHRASE_BONUS: u32 = 10;
const QUESTION_TOKEN_BONUS: u32 = 3;
const ANSWER_TOKEN_BONUS: u32 = 1;
const CATEGORY_BONUS: u32 = 2;

/// Verdict of a pure scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Some record reached the threshold; `id` names the winner.
    Match { id: u32 },
    /// Nothing scored high enough; reply with this canned kind.
    Fallback(FallbackKind),
}

/// FAQ relevance matcher.
///
/// Stateless apart from its acceptance threshold; a single instance can be
/// shared freely across callers.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    threshold: u32,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            threshold: MATCH_THRESHOLD,
        }
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matcher with a non-standard acceptance threshold.
    pub fn with_threshold(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Scores `query` against `faqs` and returns the verdict without
    /// touching any record.
    ///
    /// Empty and whitespace-only queries never reach the scoring pass: with
    /// zero significant tokens the only possible signal would be the
    /// degenerate contains-empty-string check, which would hand the win to
    /// whichever record comes first. Those queries always fall back.
    pub fn evaluate(&self, query: &str, faqs: &[FaqRecord]) -> Evaluation {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return Evaluation::Fallback(fallback::classify(&normalized));
        }

        let words = lexicon::significant_words(&normalized);

        let mut best_id = None;
        let mut best_score = 0u32;
        for faq in faqs {
            if !faq.is_well_formed() {
                continue;
            }
            let score = score_record(&normalized, &words, faq);
            // Strict `>`: ties keep the first-encountered record.
            if score > best_score {
                best_score = score;
                best_id = Some(faq.id);
            }
        }

        match best_id {
            Some(id) if best_score >= self.threshold => Evaluation::Match { id },
            _ => Evaluation::Fallback(fallback::classify(&normalized)),
        }
    }

    /// One-call convenience over a mutable slice: evaluate, bump the
    /// winner's asked-count in place, and return the reply text.
    ///
    /// Callers that own their records through [`crate::FaqStore`] should use
    /// [`crate::FaqStore::respond`] instead, which keeps the counter update
    /// behind the store.
    pub fn respond(&self, query: &str, faqs: &mut [FaqRecord]) -> String {
        match self.evaluate(query, faqs) {
            Evaluation::Match { id } => match faqs.iter_mut().find(|f| f.id == id) {
                Some(faq) => {
                    faq.asked_count += 1;
                    faq.answer.clone()
                }
                // Unreachable while `evaluate` draws ids from the same
                // slice; degrade to the generic reply rather than panic.
                None => fallback::message(FallbackKind::Unknown).to_string(),
            },
            Evaluation::Fallback(kind) => fallback::message(kind).to_string(),
        }
    }
}

fn score_record(normalized: &str, words: &[&str], faq: &FaqRecord) -> u32 {
    let question = faq.question.to_lowercase();
    let answer = faq.answer.to_lowercase();
    let mut score = 0;

    // Phrase containment, both directions: a query restating the question,
    // or a long query containing the question's opening.
    let prefix: String = question.chars().take(QUESTION_PREFIX_CHARS).collect();
    if question.contains(normalized) || normalized.contains(&prefix) {
        score += PHRASE_BONUS;
    }

    for word in words {
        if question.contains(word) {
            score += QUESTION_TOKEN_BONUS;
        }
        if answer.contains(word) {
            score += ANSWER_TOKEN_BONUS;
        }
    }

    for (trigger, category) in lexicon::CATEGORY_TRIGGERS {
        if faq.category == *category && normalized.contains(trigger) {
            score += CATEGORY_BONUS;
        }
    }

    score
}
