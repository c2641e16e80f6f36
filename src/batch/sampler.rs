//! Random batch drawing from a bucket store.

use rand::Rng;

use super::error::{BatchError, Result};
use crate::bucket::{BucketStore, ExamplePair};

/// Draw `batch_size` example pairs from one bucket, plus the
/// direction-reversed pair of every draw.
///
/// Draws are independent, with replacement; a batch may repeat an example.
/// An empty bucket is a configuration error, never silently substituted by
/// another bucket.
pub fn sample_pairs<S, R>(
    store: &S,
    bucket_id: usize,
    batch_size: usize,
    rng: &mut R,
) -> Result<(Vec<ExamplePair>, Vec<ExamplePair>)>
where
    S: BucketStore + ?Sized,
    R: Rng + ?Sized,
{
    if bucket_id >= store.num_buckets() {
        return Err(BatchError::BucketOutOfRange {
            bucket_id,
            num_buckets: store.num_buckets(),
        });
    }

    let mut forward = Vec::with_capacity(batch_size);
    let mut reversed = Vec::with_capacity(batch_size);
    for _ in 0..batch_size {
        let pair = store
            .sample(bucket_id, rng)
            .ok_or(BatchError::EmptyBucket { bucket_id })?;
        reversed.push(pair.reversed());
        forward.push(pair);
    }
    Ok((forward, reversed))
}
