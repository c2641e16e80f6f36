//! Time-major batch assembly and loss weight masking.

use ndarray::Array1;

use super::error::{BatchError, Result};
use super::framer::FramedPair;
use crate::bucket::Bucket;
use crate::vocab::{SpecialTokens, TokenId};

/// A batch in time-major layout: one array per timestep, each holding every
/// example's value at that step.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Encoder input columns, `encoder_size` arrays of `batch_size` ids each
    pub encoder_inputs: Vec<Array1<TokenId>>,
    /// Decoder input columns, `decoder_size` arrays of `batch_size` ids each
    pub decoder_inputs: Vec<Array1<TokenId>>,
    /// Loss weight columns, `decoder_size` arrays of `batch_size` floats each
    pub target_weights: Vec<Array1<f32>>,
}

impl Batch {
    /// Number of examples per column
    pub fn batch_size(&self) -> usize {
        self.encoder_inputs.first().map_or(0, Array1::len)
    }
}

/// Transpose framed pairs into time-major columns and compute the loss
/// weight mask.
///
/// The weight at step `i` gates the loss for predicting the token at
/// `i + 1` (targets are decoder inputs shifted by one). It is 0.0 on the
/// final step, which has no successor to predict, and on any step whose
/// successor is PAD; 1.0 otherwise. A one-slot decoder therefore weights
/// everything 0.0, which is correct rather than degenerate.
///
/// Every pair must already match the bucket contract; a mismatch is a
/// framing bug and fails the whole batch.
pub fn assemble(framed: &[FramedPair], bucket: Bucket, special: SpecialTokens) -> Result<Batch> {
    for pair in framed {
        if pair.encoder.len() != bucket.encoder_size {
            return Err(BatchError::LengthMismatch {
                what: "Encoder",
                expected: bucket.encoder_size,
                actual: pair.encoder.len(),
            });
        }
        if pair.decoder.len() != bucket.decoder_size {
            return Err(BatchError::LengthMismatch {
                what: "Decoder",
                expected: bucket.decoder_size,
                actual: pair.decoder.len(),
            });
        }
    }

    let batch_size = framed.len();

    let mut encoder_inputs = Vec::with_capacity(bucket.encoder_size);
    for i in 0..bucket.encoder_size {
        encoder_inputs.push(Array1::from_iter(framed.iter().map(|p| p.encoder[i])));
    }

    let mut decoder_inputs = Vec::with_capacity(bucket.decoder_size);
    let mut target_weights = Vec::with_capacity(bucket.decoder_size);
    for i in 0..bucket.decoder_size {
        decoder_inputs.push(Array1::from_iter(framed.iter().map(|p| p.decoder[i])));

        let mut weight = Array1::ones(batch_size);
        for (j, pair) in framed.iter().enumerate() {
            if i == bucket.decoder_size - 1 || pair.decoder[i + 1] == special.pad {
                weight[j] = 0.0;
            }
        }
        target_weights.push(weight);
    }

    Ok(Batch {
        encoder_inputs,
        decoder_inputs,
        target_weights,
    })
}
