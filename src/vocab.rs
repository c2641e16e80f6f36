//! Reserved vocabulary ids shared by the framer and the model boundary.

use serde::{Deserialize, Serialize};

/// Token ID type
pub type TokenId = u32;

/// Padding id, contributes zero loss weight
pub const PAD_ID: TokenId = 0;
/// Decoder start-of-sequence id
pub const GO_ID: TokenId = 1;
/// End-of-sequence id
pub const EOS_ID: TokenId = 2;
/// Out-of-vocabulary id
pub const UNK_ID: TokenId = 3;

/// The reserved control-token ids.
///
/// The framer and the model execution backend must agree on these; they are
/// carried in the bucket configuration so both sides read the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokens {
    /// Padding token id
    pub pad: TokenId,
    /// Decoder start-of-sequence id
    pub go: TokenId,
    /// End-of-sequence id
    pub eos: TokenId,
    /// Out-of-vocabulary id
    pub unk: TokenId,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            pad: PAD_ID,
            go: GO_ID,
            eos: EOS_ID,
            unk: UNK_ID,
        }
    }
}

impl SpecialTokens {
    /// Check that no two reserved ids collide.
    pub fn are_distinct(&self) -> bool {
        let ids = [self.pad, self.go, self.eos, self.unk];
        ids.iter()
            .enumerate()
            .all(|(i, a)| ids[i + 1..].iter().all(|b| a != b))
    }
}
