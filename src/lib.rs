//! Length-bucketed batch construction for sequence-to-sequence
//! conversational model training.
//!
//! Variable-length (ask, answer) exchanges are grouped into length buckets,
//! drawn at random per bucket, framed into exactly-sized encoder/decoder id
//! sequences, and assembled into time-major columns with a per-timestep
//! loss weight mask. The neural model itself (graph, optimizer, loss) sits
//! behind the [`step::ModelStep`] boundary and is not part of this crate.
//!
//! # Example
//!
//! ```
//! use charlar::batch::BatchBuilder;
//! use charlar::bucket::{Bucket, BucketConfig, ExamplePair, MemoryStore};
//! use charlar::tokenizer::WordTokenizer;
//! use charlar::vocab::SpecialTokens;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = BucketConfig::new(vec![Bucket::new(5, 10)], 2);
//! let tokenizer =
//!     WordTokenizer::from_words(&["hola", "mundo"], SpecialTokens::default()).unwrap();
//! let mut store = MemoryStore::new(1);
//! store.push(0, ExamplePair::new("hola", "mundo"));
//!
//! let builder = BatchBuilder::new(config, Box::new(tokenizer));
//! let mut rng = StdRng::seed_from_u64(42);
//! let (forward, reversed) = builder.build(&store, 0, &mut rng).unwrap();
//! assert_eq!(forward.encoder_inputs.len(), 5);
//! assert_eq!(reversed.target_weights.len(), 10);
//! ```

pub mod batch;
pub mod bucket;
pub mod step;
pub mod tokenizer;
pub mod vocab;

pub use batch::{assemble, frame_pair, sample_pairs, Batch, BatchBuilder, BatchError, FramedPair};
pub use bucket::{Bucket, BucketConfig, BucketStore, ConfigError, ExamplePair, MemoryStore};
pub use step::{ModelStep, StepError, StepFeed, StepOutcome};
pub use tokenizer::{Tokenizer, TokenizerError, WordTokenizer};
pub use vocab::{SpecialTokens, TokenId, EOS_ID, GO_ID, PAD_ID, UNK_ID};
