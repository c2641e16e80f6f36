//! Model execution boundary: validated feeds and step outcomes.
//!
//! The model itself (graph construction, optimizer, loss) lives behind the
//! [`ModelStep`] trait. This module owns the batching core's half of the
//! contract: every feed is length-checked against the bucket before it
//! crosses the boundary, and the trailing all-PAD decoder column is
//! appended here, never inside a backend.

use ndarray::Array1;
use thiserror::Error;

use crate::batch::Batch;
use crate::bucket::Bucket;
use crate::vocab::{SpecialTokens, TokenId};

/// Step boundary errors
#[derive(Debug, Error)]
pub enum StepError {
    #[error("{what} length must be equal to the one in bucket, {actual} != {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Model execution failed: {0}")]
    Execution(String),
}

/// Result type for step operations
pub type Result<T> = std::result::Result<T, StepError>;

/// A validated, ready-to-feed batch for one bucket.
///
/// `decoder_inputs` holds `decoder_size + 1` columns: the extra final
/// column is all PAD and exists only because targets are decoder inputs
/// shifted by one, so the slot past the last scored step must be readable.
/// It is never scored; the weight mask has no column for it.
#[derive(Debug, Clone)]
pub struct StepFeed {
    /// Encoder input columns, `encoder_size` of them
    pub encoder_inputs: Vec<Array1<TokenId>>,
    /// Decoder input columns, `decoder_size + 1` of them
    pub decoder_inputs: Vec<Array1<TokenId>>,
    /// Loss weight columns, `decoder_size` of them
    pub target_weights: Vec<Array1<f32>>,
}

impl StepFeed {
    /// Validate a batch against its bucket contract and append the final
    /// target placeholder column.
    ///
    /// Fails with expected-vs-actual lengths on any mismatch; the feed is
    /// never re-padded or truncated here, padding is exclusively the
    /// framer's job.
    pub fn prepare(
        batch: &Batch,
        bucket: Bucket,
        batch_size: usize,
        special: SpecialTokens,
    ) -> Result<Self> {
        check("Encoder", bucket.encoder_size, batch.encoder_inputs.len())?;
        check("Decoder", bucket.decoder_size, batch.decoder_inputs.len())?;
        check("Weights", bucket.decoder_size, batch.target_weights.len())?;
        for col in &batch.encoder_inputs {
            check("Encoder column", batch_size, col.len())?;
        }
        for col in &batch.decoder_inputs {
            check("Decoder column", batch_size, col.len())?;
        }
        for col in &batch.target_weights {
            check("Weight column", batch_size, col.len())?;
        }

        let mut decoder_inputs = batch.decoder_inputs.clone();
        decoder_inputs.push(Array1::from_elem(batch_size, special.pad));

        Ok(Self {
            encoder_inputs: batch.encoder_inputs.clone(),
            decoder_inputs,
            target_weights: batch.target_weights.clone(),
        })
    }
}

fn check(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(StepError::LengthMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Outcome of one model step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// Global gradient norm after clipping; `None` on forward-only steps
    pub gradient_norm: Option<f32>,
    /// Scalar loss for the batch
    pub loss: f32,
    /// Per-timestep output logits; populated on forward-only steps
    pub outputs: Vec<Array1<f32>>,
}

/// One training or inference step executed by an external model backend.
///
/// Backends re-validate feed lengths against their own declared contracts;
/// the double check means a framing bug surfaces as an error on whichever
/// side sees it first instead of silently corrupting training.
pub trait ModelStep {
    /// Run one step over a prepared feed.
    ///
    /// With `forward_only` false this is a training step returning
    /// `Some(gradient_norm)`; with it true, an inference step returning
    /// `None` and the per-timestep outputs.
    fn step(&mut self, feed: &StepFeed, bucket_id: usize, forward_only: bool)
        -> Result<StepOutcome>;
}
