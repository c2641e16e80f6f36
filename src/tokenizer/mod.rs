//! Sentence-to-ids tokenizer adapter.
//!
//! Vocabulary construction happens outside this crate; the batching core
//! only needs a deterministic mapping from a sentence to an ordered
//! sequence of token ids. `WordTokenizer` is a lookup adapter over a
//! caller-supplied vocabulary.

mod error;
mod traits;
mod word;

pub use error::{Result, TokenizerError};
pub use traits::Tokenizer;
pub use word::WordTokenizer;
