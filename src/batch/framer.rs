//! Fixed-length sequence framing for one example pair.

use super::error::{BatchError, Result};
use crate::bucket::{Bucket, ExamplePair};
use crate::tokenizer::Tokenizer;
use crate::vocab::{SpecialTokens, TokenId};

/// Encoder and decoder id sequences framed to a bucket's exact sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramedPair {
    /// Reversed, padded source ids, exactly `encoder_size` long
    pub encoder: Vec<TokenId>,
    /// GO-framed target ids, exactly `decoder_size` long
    pub decoder: Vec<TokenId>,
}

/// Frame the source ids for the encoder: right-pad with PAD up to
/// `encoder_size`, then reverse the entire padded sequence.
///
/// The reversal happens after padding, not before. Real tokens end up at
/// the tail of the array, adjacent to the decoder's first step, which
/// shortens the effective path from the sequence start to the decoder.
pub fn frame_source(
    ids: &[TokenId],
    bucket: Bucket,
    special: SpecialTokens,
) -> Result<Vec<TokenId>> {
    if ids.len() > bucket.encoder_size {
        return Err(BatchError::SourceTooLong {
            len: ids.len(),
            max: bucket.encoder_size,
        });
    }
    let mut framed = Vec::with_capacity(bucket.encoder_size);
    framed.extend_from_slice(ids);
    framed.resize(bucket.encoder_size, special.pad);
    framed.reverse();
    Ok(framed)
}

/// Frame the target ids for the decoder as
/// `[GO] target [EOS] PAD…` of exactly `decoder_size`.
///
/// The GO and EOS slots always count against the bucket contract, so the
/// target may hold at most `decoder_size - 2` ids. Over-long targets are an
/// error, never truncated.
pub fn frame_target(
    ids: &[TokenId],
    bucket: Bucket,
    special: SpecialTokens,
) -> Result<Vec<TokenId>> {
    if ids.len() + 2 > bucket.decoder_size {
        return Err(BatchError::TargetTooLong {
            len: ids.len(),
            max: bucket.decoder_size,
        });
    }
    let mut framed = Vec::with_capacity(bucket.decoder_size);
    framed.push(special.go);
    framed.extend_from_slice(ids);
    framed.push(special.eos);
    framed.resize(bucket.decoder_size, special.pad);
    Ok(framed)
}

/// Tokenize and frame one example pair under a bucket contract.
pub fn frame_pair(
    tokenizer: &dyn Tokenizer,
    pair: &ExamplePair,
    bucket: Bucket,
    special: SpecialTokens,
) -> Result<FramedPair> {
    let source_ids = tokenizer.encode(&pair.source)?;
    let target_ids = tokenizer.encode(&pair.target)?;
    Ok(FramedPair {
        encoder: frame_source(&source_ids, bucket, special)?,
        decoder: frame_target(&target_ids, bucket, special)?,
    })
}
