//! Batch construction: sampling, framing, and time-major assembly.
//!
//! Data flow for one training batch: the sampler draws `batch_size`
//! exchanges from one bucket's store, the framer turns each exchange into
//! exactly-sized encoder/decoder id sequences, and the assembler transposes
//! them into per-timestep columns with the loss weight mask. `BatchBuilder`
//! composes the three.

mod assembler;
mod builder;
mod error;
mod framer;
mod sampler;

#[cfg(test)]
mod tests;

pub use assembler::{assemble, Batch};
pub use builder::BatchBuilder;
pub use error::{BatchError, Result};
pub use framer::{frame_pair, frame_source, frame_target, FramedPair};
pub use sampler::sample_pairs;
