//! FAQ relevance matching and storage for the campus assistant.
//!
//! This crate holds the domain core of the assistant:
//!
//! - **Records**: question/answer pairs with a category and usage counters
//! - **Matching**: a deterministic bag-of-words scorer that maps a free-text
//!   query to the single most relevant record, or to a canned fallback
//! - **Fallbacks**: trigger-classified canned replies plus an injectable
//!   variant-selection policy
//! - **Store**: the owned, single-writer FAQ collection with an optional
//!   JSON snapshot backend
//!
//! The matcher itself is pure: [`Matcher::evaluate`] never mutates anything.
//! The asked-count side effect lives with whoever owns the records, normally
//! [`FaqStore::respond`].

pub mod engine;
pub mod error;
pub mod fallback;
pub mod lexicon;
pub mod seed;
pub mod store;
pub mod types;

pub use engine::{Evaluation, Matcher, MATCH_THRESHOLD};
pub use error::FaqError;
pub use fallback::{FallbackKind, FixedPicker, UniformPicker, VariantPicker};
pub use seed::seed_faqs;
pub use store::{ChatReply, FaqStore, StoreBackend};
pub use types::{Category, FaqRecord};
