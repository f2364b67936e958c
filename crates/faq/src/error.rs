use thiserror::Error;

/// Errors produced by the FAQ store.
///
/// The matcher itself has no error surface: every query produces a reply.
#[derive(Debug, Error)]
pub enum FaqError {
    /// No record with the requested id.
    #[error("faq {0} not found")]
    NotFound(u32),
    /// Rejected record contents (empty question or answer).
    #[error("invalid faq: {0}")]
    Invalid(String),
    /// Snapshot file could not be read or written.
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot file held unparseable JSON.
    #[error("snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
