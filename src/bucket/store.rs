//! Per-bucket example storage with uniform random sampling.

use rand::Rng;

/// One (source, target) conversational exchange drawn from a bucket.
///
/// Exists only while a batch is being built; the store keeps the canonical
/// copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplePair {
    /// Raw source sentence
    pub source: String,
    /// Raw target sentence
    pub target: String,
}

impl ExamplePair {
    /// Create a new example pair
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The opposite-direction pair, for dual-direction training reuse
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }
}

/// A collection of per-bucket example repositories supporting uniform
/// random draws.
///
/// The RNG is injected per call rather than owned by the store, so a seeded
/// generator makes sampling fully deterministic in tests. Implementations
/// take `&self`; callers wanting parallel prefetch over a shared store must
/// synchronize externally.
pub trait BucketStore {
    /// Number of buckets this store holds
    fn num_buckets(&self) -> usize;

    /// Draw one example uniformly at random from the given bucket.
    ///
    /// Returns `None` when the bucket id is out of range or the bucket
    /// holds no examples.
    fn sample<R: Rng + ?Sized>(&self, bucket_id: usize, rng: &mut R) -> Option<ExamplePair>;
}

/// In-memory bucket store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    buckets: Vec<Vec<ExamplePair>>,
}

impl MemoryStore {
    /// Create a store with `num_buckets` empty buckets
    pub fn new(num_buckets: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); num_buckets],
        }
    }

    /// Append an example to a bucket. Out-of-range ids are ignored; length
    /// filtering into the right bucket is the loader's job, done before
    /// examples reach this store.
    pub fn push(&mut self, bucket_id: usize, pair: ExamplePair) {
        if let Some(bucket) = self.buckets.get_mut(bucket_id) {
            bucket.push(pair);
        }
    }

    /// Number of examples held by one bucket
    pub fn bucket_len(&self, bucket_id: usize) -> usize {
        self.buckets.get(bucket_id).map_or(0, Vec::len)
    }
}

impl BucketStore for MemoryStore {
    fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    fn sample<R: Rng + ?Sized>(&self, bucket_id: usize, rng: &mut R) -> Option<ExamplePair> {
        let bucket = self.buckets.get(bucket_id)?;
        if bucket.is_empty() {
            return None;
        }
        Some(bucket[rng.random_range(0..bucket.len())].clone())
    }
}
