//! Canned replies for queries no FAQ record answers, and the pluggable
//! policy for choosing among equally-weighted message variants.

use rand::Rng;

/// Which canned reply a below-threshold query earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackKind {
    Greeting,
    Thanks,
    Farewell,
    Help,
    Unknown,
}

const GREETING_TRIGGERS: &[&str] = &["hello", "hi", "hey", "greetings"];
const THANKS_TRIGGERS: &[&str] = &["thank", "thanks", "thnx"];
const FAREWELL_TRIGGERS: &[&str] = &["bye", "goodbye", "see you"];
const HELP_TRIGGERS: &[&str] = &["help", "what can you do"];

/// Classifies a normalized query into a fallback kind. Trigger groups are
/// checked in fixed priority order; within a group any trigger contained
/// anywhere in the query counts.
pub fn classify(normalized: &str) -> FallbackKind {
    let hit = |triggers: &[&str]| triggers.iter().any(|t| normalized.contains(t));
    if hit(GREETING_TRIGGERS) {
        FallbackKind::Greeting
    } else if hit(THANKS_TRIGGERS) {
        FallbackKind::Thanks
    } else if hit(FAREWELL_TRIGGERS) {
        FallbackKind::Farewell
    } else if hit(HELP_TRIGGERS) {
        FallbackKind::Help
    } else {
        FallbackKind::Unknown
    }
}

/// The canned reply text for a fallback kind.
pub fn message(kind: FallbackKind) -> &'static str {
    match kind {
        FallbackKind::Greeting => {
            "Hello! I'm your college virtual assistant. How can I help you today? You can ask me about:\n\
             • College timings and facilities\n\
             • Exams and schedules\n\
             • Library services\n\
             • ID cards and certificates\n\
             • Fees and payments\n\
             • Hostel information\n\
             • Placements and internships\n\
             • And much more!"
        }
        FallbackKind::Thanks => {
            "You're welcome! Feel free to ask if you need anything else. I'm here to help!"
        }
        FallbackKind::Farewell => {
            "Goodbye! Have a great day. Don't hesitate to come back if you have any questions!"
        }
        FallbackKind::Help => {
            "I can help you with:\n\
             • General college information\n\
             • Administration queries (ID cards, certificates, fees)\n\
             • Exam-related questions\n\
             • Library services\n\
             • Academic information\n\
             • Hostel and accommodation\n\
             • Placement and career guidance\n\
             • IT and technical support\n\
             • Sports and activities\n\
             • And many more college-related topics!\n\n\
             Just ask me anything!"
        }
        FallbackKind::Unknown => {
            "I'm not sure about that specific question. Here are some topics I can help with:\n\
             • College timings and facilities\n\
             • Exams, schedules, and results\n\
             • Library services and book borrowing\n\
             • ID cards, certificates, and documents\n\
             • Fees and payments\n\
             • Hostel accommodation\n\
             • Placements and internships\n\
             • Attendance and academics\n\
             • Sports and activities\n\n\
             Try rephrasing your question or check the FAQs section for more information. \
             You can also contact the admin office for specific queries."
        }
    }
}

/// Strategy for choosing among equally-weighted reply variants.
///
/// Production callers use [`UniformPicker`]; tests inject [`FixedPicker`] so
/// assertions can pin a concrete variant.
pub trait VariantPicker: Send + Sync {
    /// Index into a variant list of the given length. Implementations must
    /// return a value in `0..len` for any non-zero `len`.
    fn pick(&self, len: usize) -> usize;

    /// Convenience: pick one of `variants`, or `None` when the list is empty.
    fn choose<'a>(&self, variants: &'a [&'a str]) -> Option<&'a str> {
        if variants.is_empty() {
            None
        } else {
            Some(variants[self.pick(variants.len()) % variants.len()])
        }
    }
}

/// Uniform random choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformPicker;

impl VariantPicker for UniformPicker {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..len)
        }
    }
}

/// Always the same index (modulo the list length).
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl VariantPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.0 % len
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_priority_is_fixed() {
        assert_eq!(classify("hello there"), FallbackKind::Greeting);
        assert_eq!(classify("thanks a lot"), FallbackKind::Thanks);
        assert_eq!(classify("ok goodbye"), FallbackKind::Farewell);
        assert_eq!(classify("can you help"), FallbackKind::Help);
        assert_eq!(classify("quantum chromodynamics"), FallbackKind::Unknown);
        // Greeting outranks thanks when both trigger.
        assert_eq!(classify("hi thanks"), FallbackKind::Greeting);
    }

    #[test]
    fn empty_query_is_unknown() {
        assert_eq!(classify(""), FallbackKind::Unknown);
    }

    #[test]
    fn fixed_picker_is_deterministic() {
        let variants = ["a", "b", "c"];
        assert_eq!(FixedPicker(0).choose(&variants), Some("a"));
        assert_eq!(FixedPicker(4).choose(&variants), Some("b"));
        assert_eq!(FixedPicker(0).choose(&[]), None);
    }

    #[test]
    fn uniform_picker_stays_in_bounds() {
        let picker = UniformPicker;
        for _ in 0..100 {
            assert!(picker.pick(5) < 5);
        }
    }
}
