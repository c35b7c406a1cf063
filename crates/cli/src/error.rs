// crates/cli/src/error.rs
use closed_range_shared_kernel::{ClosedRangeError, Range};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Range(#[from] ClosedRangeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Range {range} holds {cardinality} values, more than the limit of {max_len} (see list --max-len)")]
    ListTooLong {
        range: Range,
        cardinality: u128,
        max_len: u64,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
