//! Bucket configuration error types.

use thiserror::Error;

/// Bucket configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No buckets configured")]
    NoBuckets,

    #[error("Bucket {0} has a zero-length side")]
    ZeroLength(usize),

    #[error("Batch size must be positive")]
    ZeroBatchSize,

    #[error("Reserved token ids must be distinct: pad={pad} go={go} eos={eos} unk={unk}")]
    DuplicateSpecialToken { pad: u32, go: u32, eos: u32, unk: u32 },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for bucket configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
