use thiserror::Error;

/// Errors raised by a [`Medium`](crate::Medium) backend.
#[derive(Debug, Error)]
pub enum MediumError {
    /// The write would push the medium past its quota. The previous value is kept.
    #[error("quota exceeded writing `{key}`: {needed} units needed, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },
    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
    #[error("medium lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("medium I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by [`Store`](crate::Store) write operations.
///
/// Reads never fail; they log and substitute an empty result instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store is closed")]
    Closed,
    #[error(transparent)]
    Medium(#[from] MediumError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// A record carried an `id` that is neither a string nor a number.
    #[error("invalid id in {collection}: {value}")]
    InvalidId { collection: String, value: String },
    /// Another record in the collection already uses this id.
    #[error("duplicate id in {collection}: {id}")]
    DuplicateId { collection: String, id: String },
    #[error("invalid record in {collection}: {reason}")]
    InvalidRecord { collection: String, reason: String },
}

impl StoreError {
    /// True when the underlying medium rejected a write for lack of space.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, StoreError::Medium(MediumError::QuotaExceeded { .. }))
    }
}
