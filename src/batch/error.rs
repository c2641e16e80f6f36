//! Batch construction error types.

use thiserror::Error;

use crate::tokenizer::TokenizerError;

/// Batch construction errors
///
/// Every variant is a contract violation. An over-long example means the
/// upstream length filter put it in the wrong bucket; nothing here is
/// retried or truncated.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Source length {len} exceeds the bucket encoder size {max}")]
    SourceTooLong { len: usize, max: usize },

    #[error(
        "Target length {len} exceeds the bucket decoder size {max} minus the 2 slots reserved for GO/EOS"
    )]
    TargetTooLong { len: usize, max: usize },

    #[error("Bucket id {bucket_id} out of range for {num_buckets} buckets")]
    BucketOutOfRange {
        bucket_id: usize,
        num_buckets: usize,
    },

    #[error("Bucket {bucket_id} has no examples to sample")]
    EmptyBucket { bucket_id: usize },

    #[error("{what} length must be equal to the one in bucket, {actual} != {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
}

/// Result type for batch construction
pub type Result<T> = std::result::Result<T, BatchError>;
