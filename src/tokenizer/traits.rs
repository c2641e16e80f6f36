//! Tokenizer trait definition.

use super::error::Result;
use crate::vocab::TokenId;

/// Sentence-to-ids adapter consumed by the sequence framer.
///
/// Implementations must be deterministic: the same sentence always maps to
/// the same id sequence, with no side effects visible to the caller.
pub trait Tokenizer {
    /// Encode a sentence to token IDs
    fn encode(&self, text: &str) -> Result<Vec<TokenId>>;

    /// Decode token IDs back to text
    fn decode(&self, ids: &[TokenId]) -> Result<String>;

    /// Get vocabulary size, reserved ids included
    fn vocab_size(&self) -> usize;

    /// Get ID for a token
    fn token_to_id(&self, token: &str) -> Option<TokenId>;

    /// Get token for an ID
    fn id_to_token(&self, id: TokenId) -> Option<&str>;
}
