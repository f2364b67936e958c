//! The owned FAQ collection.
//!
//! The store is the single writer for FAQ state: the matcher only ever sees
//! a shared slice, and the asked-count increment that follows a successful
//! match is applied here. Callers embedding the store in a concurrent server
//! wrap it in a lock; the store itself assumes exclusive access per call.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::{Evaluation, Matcher};
use crate::error::FaqError;
use crate::fallback;
use crate::types::{Category, FaqRecord};

/// Where the store keeps its records between runs.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// No persistence; contents live and die with the process.
    Memory,
    /// Full-collection JSON snapshot rewritten after every mutation.
    JsonFile(PathBuf),
}

#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    faqs: Vec<FaqRecord>,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    faqs: &'a [FaqRecord],
}

/// Outcome of answering one chat query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Text to show the user: either a record's answer or a canned fallback.
    pub answer: String,
    /// Id of the record that answered, when one reached the threshold.
    pub matched_id: Option<u32>,
}

/// Owned FAQ collection with optional snapshot persistence.
pub struct FaqStore {
    faqs: Vec<FaqRecord>,
    backend: StoreBackend,
}

impl FaqStore {
    /// Store without persistence, starting from `seed`.
    pub fn in_memory(seed: Vec<FaqRecord>) -> Self {
        Self {
            faqs: seed,
            backend: StoreBackend::Memory,
        }
    }

    /// Store backed by a JSON snapshot at `path`.
    ///
    /// An existing snapshot is loaded and healed: any seed id missing from
    /// it (an older snapshot, or one truncated by hand) is appended back.
    /// A missing snapshot starts from the seed. Either way the result is
    /// written out so the file reflects what is being served.
    pub fn open(path: impl Into<PathBuf>, seed: Vec<FaqRecord>) -> Result<Self, FaqError> {
        let path = path.into();
        let mut faqs = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let snapshot: Snapshot = serde_json::from_str(&raw)?;
            tracing::info!(count = snapshot.faqs.len(), path = %path.display(), "loaded faq snapshot");
            snapshot.faqs
        } else {
            Vec::new()
        };

        let mut healed = 0usize;
        for record in seed {
            if !faqs.iter().any(|f| f.id == record.id) {
                faqs.push(record);
                healed += 1;
            }
        }
        if healed > 0 {
            tracing::info!(healed, "merged missing seed faqs into snapshot");
        }

        let store = Self {
            faqs,
            backend: StoreBackend::JsonFile(path),
        };
        store.persist()?;
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.faqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faqs.is_empty()
    }

    /// Read-only view for scoring and analytics.
    pub fn records(&self) -> &[FaqRecord] {
        &self.faqs
    }

    /// Clone of every record, in storage order.
    pub fn list(&self) -> Vec<FaqRecord> {
        self.faqs.clone()
    }

    pub fn get(&self, id: u32) -> Option<&FaqRecord> {
        self.faqs.iter().find(|f| f.id == id)
    }

    /// Case-insensitive substring filter over question and answer text.
    pub fn search(&self, query: &str) -> Vec<FaqRecord> {
        let needle = query.to_lowercase();
        self.faqs
            .iter()
            .filter(|f| {
                f.question.to_lowercase().contains(&needle)
                    || f.answer.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Appends a record under a fresh id (current max + 1) and persists.
    pub fn add(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: Category,
    ) -> Result<FaqRecord, FaqError> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() || answer.trim().is_empty() {
            return Err(FaqError::Invalid(
                "question and answer are both required".into(),
            ));
        }

        let next_id = self.faqs.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let record = FaqRecord::new(next_id, question, answer, category);
        self.faqs.push(record.clone());
        self.persist()?;
        tracing::info!(id = record.id, category = %record.category, "faq added");
        Ok(record)
    }

    /// Removes and returns the record with `id`.
    pub fn delete(&mut self, id: u32) -> Result<FaqRecord, FaqError> {
        let position = self
            .faqs
            .iter()
            .position(|f| f.id == id)
            .ok_or(FaqError::NotFound(id))?;
        let removed = self.faqs.remove(position);
        self.persist()?;
        tracing::info!(id, "faq deleted");
        Ok(removed)
    }

    /// Bumps and returns the helpful counter for `id`.
    pub fn mark_helpful(&mut self, id: u32) -> Result<u32, FaqError> {
        let count = {
            let record = self
                .faqs
                .iter_mut()
                .find(|f| f.id == id)
                .ok_or(FaqError::NotFound(id))?;
            record.helpful_count += 1;
            record.helpful_count
        };
        self.persist()?;
        Ok(count)
    }

    /// Answers a chat query: evaluates against the live records, applies the
    /// asked-count increment on a match, and persists.
    ///
    /// Never fails: a reply is always produced, and a snapshot write failure
    /// only loses counter durability, which is logged rather than surfaced.
    pub fn respond(&mut self, matcher: &Matcher, query: &str) -> ChatReply {
        match matcher.evaluate(query, &self.faqs) {
            Evaluation::Match { id } => {
                let answer = self
                    .faqs
                    .iter_mut()
                    .find(|f| f.id == id)
                    .map(|record| {
                        record.asked_count += 1;
                        record.answer.clone()
                    })
                    .unwrap_or_else(|| fallback::message(fallback::FallbackKind::Unknown).into());
                if let Err(error) = self.persist() {
                    tracing::warn!(%error, "failed to persist asked-count update");
                }
                ChatReply {
                    answer,
                    matched_id: Some(id),
                }
            }
            Evaluation::Fallback(kind) => ChatReply {
                answer: fallback::message(kind).to_string(),
                matched_id: None,
            },
        }
    }

    fn persist(&self) -> Result<(), FaqError> {
        match &self.backend {
            StoreBackend::Memory => Ok(()),
            StoreBackend::JsonFile(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                let json = serde_json::to_string_pretty(&SnapshotRef { faqs: &self.faqs })?;
                fs::write(path, json)?;
                Ok(())
            }
        }
    }

    /// Path of the snapshot file, when one is configured.
    pub fn snapshot_path(&self) -> Option<&Path> {
        match &self.backend {
            StoreBackend::Memory => None,
            StoreBackend::JsonFile(path) => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_faqs;
    use crate::types::Category;

    #[test]
    fn add_allocates_max_plus_one() {
        let mut store = FaqStore::in_memory(seed_faqs());
        let added = store
            .add("Is there a darkroom?", "Yes, in the arts block.", Category::Activities)
            .unwrap();
        assert_eq!(added.id, 53);
        assert_eq!(added.asked_count, 0);
        assert_eq!(added.helpful_count, 0);
    }

    #[test]
    fn add_rejects_blank_fields() {
        let mut store = FaqStore::in_memory(Vec::new());
        assert!(matches!(
            store.add("  ", "answer", Category::General),
            Err(FaqError::Invalid(_))
        ));
        assert!(matches!(
            store.add("question", "", Category::General),
            Err(FaqError::Invalid(_))
        ));
    }

    #[test]
    fn delete_unknown_id_errors() {
        let mut store = FaqStore::in_memory(seed_faqs());
        assert!(matches!(store.delete(9999), Err(FaqError::NotFound(9999))));
        assert_eq!(store.len(), 52);
    }

    #[test]
    fn mark_helpful_bumps_and_returns() {
        let mut store = FaqStore::in_memory(seed_faqs());
        let before = store.get(1).unwrap().helpful_count;
        let after = store.mark_helpful(1).unwrap();
        assert_eq!(after, before + 1);
    }

    #[test]
    fn search_is_case_insensitive_over_both_fields() {
        let store = FaqStore::in_memory(seed_faqs());
        let hits = store.search("LIBRARY");
        assert!(hits.iter().any(|f| f.id == 20));
        // "condonation" only appears in an answer body.
        let hits = store.search("condonation");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 28);
    }

    #[test]
    fn respond_increments_and_reports_match() {
        let mut store = FaqStore::in_memory(seed_faqs());
        let before = store.get(20).unwrap().asked_count;
        let reply = store.respond(&Matcher::new(), "what is the library timing");
        assert_eq!(reply.matched_id, Some(20));
        assert_eq!(reply.answer, store.get(20).unwrap().answer);
        assert_eq!(store.get(20).unwrap().asked_count, before + 1);
    }

    #[test]
    fn respond_falls_back_without_mutation() {
        let mut store = FaqStore::in_memory(seed_faqs());
        let counters: Vec<u32> = store.records().iter().map(|f| f.asked_count).collect();
        let reply = store.respond(&Matcher::new(), "hello");
        assert_eq!(reply.matched_id, None);
        let after: Vec<u32> = store.records().iter().map(|f| f.asked_count).collect();
        assert_eq!(counters, after);
    }

    #[test]
    fn snapshot_roundtrip_preserves_counters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faqs.json");

        {
            let mut store = FaqStore::open(&path, seed_faqs()).unwrap();
            store.respond(&Matcher::new(), "what is the library timing");
            store.mark_helpful(1).unwrap();
        }

        let store = FaqStore::open(&path, seed_faqs()).unwrap();
        assert_eq!(store.get(20).unwrap().asked_count, 29);
        assert_eq!(store.get(1).unwrap().helpful_count, 39);
        assert_eq!(store.len(), 52);
    }

    #[test]
    fn partial_snapshot_is_healed_from_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faqs.json");
        // Snapshot containing a single custom record and one seeded id.
        fs::write(
            &path,
            r#"{"faqs":[{"id":1,"question":"Custom?","answer":"Custom.","category":"General"},
                        {"id":100,"question":"Extra?","answer":"Extra.","category":"IT"}]}"#,
        )
        .unwrap();

        let store = FaqStore::open(&path, seed_faqs()).unwrap();
        // Seeded ids 2..=52 were merged back; the edited id 1 was kept as-is.
        assert_eq!(store.len(), 53);
        assert_eq!(store.get(1).unwrap().question, "Custom?");
        assert!(store.get(100).is_some());
        assert!(store.get(52).is_some());
    }
}
