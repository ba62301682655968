use thiserror::Error;

/// Number of positions in the legacy `[operation, body]` pair.
pub const PAIR_LEN: usize = 2;

#[derive(Error, Debug)]
pub enum EnvelopeError {
    #[error("Index {index} is out of range for a pair of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("Slot {index} expects {expected}")]
    SlotMismatch { index: usize, expected: &'static str },

    #[error("Malformed legacy query: {0}")]
    MalformedLegacy(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation name is empty")]
    EmptyOperation,

    #[error("Executor error: {0}")]
    Executor(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl EnvelopeError {
    pub fn out_of_range(index: usize) -> Self {
        Self::OutOfRange {
            index,
            len: PAIR_LEN,
        }
    }

    /// Wrap a failure reported by a query executor.
    pub fn executor<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Executor(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, EnvelopeError>;
