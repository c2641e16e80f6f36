//! Bucket list configuration with YAML loading and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Result};
use crate::vocab::SpecialTokens;

/// One length class: the maximum encoder and decoder sequence lengths for
/// examples assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Maximum source length after tokenization
    pub encoder_size: usize,
    /// Maximum target length including the GO and EOS slots
    pub decoder_size: usize,
}

impl Bucket {
    /// Create a new bucket contract
    pub fn new(encoder_size: usize, decoder_size: usize) -> Self {
        Self {
            encoder_size,
            decoder_size,
        }
    }
}

/// Ordered bucket list plus the batch parameters shared by every batch
/// built against it.
///
/// Bucket sizes are conventionally non-decreasing with increasing id so the
/// final entry is the largest; that convention is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketConfig {
    /// Length contracts, strictly indexed in ascending-id order
    pub buckets: Vec<Bucket>,
    /// Number of examples drawn per batch
    pub batch_size: usize,
    /// Reserved control-token ids
    #[serde(default)]
    pub special: SpecialTokens,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            buckets: vec![
                Bucket::new(5, 15),
                Bucket::new(10, 20),
                Bucket::new(15, 25),
                Bucket::new(20, 30),
            ],
            batch_size: 64,
            special: SpecialTokens::default(),
        }
    }
}

impl BucketConfig {
    /// Create a config with default special ids
    pub fn new(buckets: Vec<Bucket>, batch_size: usize) -> Self {
        Self {
            buckets,
            batch_size,
            special: SpecialTokens::default(),
        }
    }

    /// Set the batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the reserved token ids
    pub fn with_special(mut self, special: SpecialTokens) -> Self {
        self.special = special;
        self
    }

    /// Number of configured buckets
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Look up one bucket contract by id
    pub fn bucket(&self, bucket_id: usize) -> Option<Bucket> {
        self.buckets.get(bucket_id).copied()
    }

    /// The final bucket, which by convention carries the absolute maximum
    /// encoder/decoder lengths. Model backends size their per-timestep
    /// placeholders from this entry.
    pub fn largest(&self) -> Option<Bucket> {
        self.buckets.last().copied()
    }

    /// Check the structural invariants: at least one bucket, positive
    /// lengths, positive batch size, distinct reserved ids.
    pub fn validate(&self) -> Result<()> {
        if self.buckets.is_empty() {
            return Err(ConfigError::NoBuckets);
        }
        for (i, bucket) in self.buckets.iter().enumerate() {
            if bucket.encoder_size == 0 || bucket.decoder_size == 0 {
                return Err(ConfigError::ZeroLength(i));
            }
        }
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if !self.special.are_distinct() {
            return Err(ConfigError::DuplicateSpecialToken {
                pad: self.special.pad,
                go: self.special.go,
                eos: self.special.eos,
                unk: self.special.unk,
            });
        }
        Ok(())
    }

    /// Parse and validate a config from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
