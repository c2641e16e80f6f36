//! End-to-end batch construction: sample, frame, assemble.

use rand::Rng;

use super::assembler::{assemble, Batch};
use super::error::{BatchError, Result};
use super::framer::frame_pair;
use super::sampler::sample_pairs;
use crate::bucket::{Bucket, BucketConfig, BucketStore, ExamplePair};
use crate::tokenizer::Tokenizer;

/// Builds training batches one bucket at a time.
///
/// Holds the bucket contracts and the tokenizer; the bucket store and the
/// RNG are passed per call, so deterministic tests inject a seeded
/// generator and a canned store.
pub struct BatchBuilder {
    config: BucketConfig,
    tokenizer: Box<dyn Tokenizer>,
}

impl BatchBuilder {
    /// Create a builder over a bucket configuration and a tokenizer
    pub fn new(config: BucketConfig, tokenizer: Box<dyn Tokenizer>) -> Self {
        Self { config, tokenizer }
    }

    /// The bucket configuration this builder frames against
    pub fn config(&self) -> &BucketConfig {
        &self.config
    }

    fn bucket(&self, bucket_id: usize) -> Result<Bucket> {
        self.config
            .bucket(bucket_id)
            .ok_or(BatchError::BucketOutOfRange {
                bucket_id,
                num_buckets: self.config.num_buckets(),
            })
    }

    /// Draw one batch worth of forward and reversed example pairs
    pub fn sample<S, R>(
        &self,
        store: &S,
        bucket_id: usize,
        rng: &mut R,
    ) -> Result<(Vec<ExamplePair>, Vec<ExamplePair>)>
    where
        S: BucketStore + ?Sized,
        R: Rng + ?Sized,
    {
        self.bucket(bucket_id)?;
        sample_pairs(store, bucket_id, self.config.batch_size, rng)
    }

    /// Frame every pair under the bucket's contract and assemble the
    /// time-major batch
    pub fn assemble_pairs(&self, bucket_id: usize, pairs: &[ExamplePair]) -> Result<Batch> {
        let bucket = self.bucket(bucket_id)?;
        let framed = pairs
            .iter()
            .map(|p| frame_pair(self.tokenizer.as_ref(), p, bucket, self.config.special))
            .collect::<Result<Vec<_>>>()?;
        assemble(&framed, bucket, self.config.special)
    }

    /// Sample and assemble both training directions for one bucket,
    /// returning the forward batch and the reversed (answer, ask) batch
    pub fn build<S, R>(&self, store: &S, bucket_id: usize, rng: &mut R) -> Result<(Batch, Batch)>
    where
        S: BucketStore + ?Sized,
        R: Rng + ?Sized,
    {
        let (forward, reversed) = self.sample(store, bucket_id, rng)?;
        Ok((
            self.assemble_pairs(bucket_id, &forward)?,
            self.assemble_pairs(bucket_id, &reversed)?,
        ))
    }
}
