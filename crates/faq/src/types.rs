use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic label attached to every FAQ record.
///
/// The set is closed: analytics groups by it and the matcher's category
/// triggers key on it, so free-form labels are rejected at the API edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    General,
    Administration,
    Exams,
    Library,
    Academics,
    Hostel,
    Transportation,
    Sports,
    Activities,
    Placement,
    IT,
    Medical,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::General => "General",
            Category::Administration => "Administration",
            Category::Exams => "Exams",
            Category::Library => "Library",
            Category::Academics => "Academics",
            Category::Hostel => "Hostel",
            Category::Transportation => "Transportation",
            Category::Sports => "Sports",
            Category::Activities => "Activities",
            Category::Placement => "Placement",
            Category::IT => "IT",
            Category::Medical => "Medical",
        };
        f.write_str(name)
    }
}

/// A stored question/answer pair with usage counters.
///
/// Wire names are camelCase to match the JSON payloads the API serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqRecord {
    /// Unique, stable identifier within the owning store.
    pub id: u32,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Category,
    /// Times this record was served as a chat answer.
    #[serde(default)]
    pub asked_count: u32,
    /// Times a reader marked this record helpful.
    #[serde(default)]
    pub helpful_count: u32,
}

impl FaqRecord {
    /// Fresh record with zeroed counters.
    pub fn new(
        id: u32,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            category,
            asked_count: 0,
            helpful_count: 0,
        }
    }

    /// A record the scorer is allowed to consider. Records missing either
    /// text field are skipped defensively rather than failing the pass.
    pub fn is_well_formed(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_as_bare_label() {
        let json = serde_json::to_string(&Category::IT).unwrap();
        assert_eq!(json, "\"IT\"");
        let back: Category = serde_json::from_str("\"Exams\"").unwrap();
        assert_eq!(back, Category::Exams);
    }

    #[test]
    fn record_wire_names_are_camel_case() {
        let record = FaqRecord::new(7, "Q?", "A.", Category::Library);
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("askedCount").is_some());
        assert!(value.get("helpfulCount").is_some());
        assert!(value.get("asked_count").is_none());
    }

    #[test]
    fn blank_fields_are_malformed() {
        let mut record = FaqRecord::new(1, "Q?", "A.", Category::General);
        assert!(record.is_well_formed());
        record.answer = "   ".into();
        assert!(!record.is_well_formed());
    }
}
