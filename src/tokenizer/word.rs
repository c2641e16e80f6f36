//! Word-level lookup tokenizer over a fixed vocabulary.

use std::collections::HashMap;

use super::error::{Result, TokenizerError};
use super::traits::Tokenizer;
use crate::vocab::{SpecialTokens, TokenId};

/// Whitespace-splitting tokenizer backed by a caller-supplied vocabulary.
///
/// Words missing from the vocabulary map to the UNK id on encode. Decoding
/// an id that is neither a vocabulary entry nor a reserved id is an error.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    special: SpecialTokens,
    vocab: HashMap<String, TokenId>,
    id_to_word: HashMap<TokenId, String>,
}

impl WordTokenizer {
    /// Create a tokenizer from explicit (word, id) entries.
    ///
    /// Ids must not collide with the reserved control ids.
    pub fn new(
        entries: impl IntoIterator<Item = (String, TokenId)>,
        special: SpecialTokens,
    ) -> Result<Self> {
        let mut vocab = HashMap::new();
        let mut id_to_word = HashMap::new();
        let reserved = [special.pad, special.go, special.eos, special.unk];

        for (word, id) in entries {
            if reserved.contains(&id) {
                return Err(TokenizerError::ReservedId(word));
            }
            vocab.insert(word.clone(), id);
            id_to_word.insert(id, word);
        }
        if vocab.is_empty() {
            return Err(TokenizerError::EmptyVocab);
        }

        Ok(Self {
            special,
            vocab,
            id_to_word,
        })
    }

    /// Create a tokenizer from an ordered word list, numbering words from
    /// the first id past the reserved range.
    pub fn from_words<S: AsRef<str>>(words: &[S], special: SpecialTokens) -> Result<Self> {
        let first = [special.pad, special.go, special.eos, special.unk]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1;
        Self::new(
            words
                .iter()
                .enumerate()
                .map(|(i, w)| (w.as_ref().to_string(), first + i as TokenId)),
            special,
        )
    }

    /// The reserved ids this tokenizer was built with.
    pub fn special(&self) -> SpecialTokens {
        self.special
    }
}

impl Tokenizer for WordTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<TokenId>> {
        Ok(text
            .split_whitespace()
            .map(|w| self.vocab.get(w).copied().unwrap_or(self.special.unk))
            .collect())
    }

    fn decode(&self, ids: &[TokenId]) -> Result<String> {
        let control = [self.special.pad, self.special.go, self.special.eos];
        let mut words = Vec::with_capacity(ids.len());
        for &id in ids {
            match self.id_to_word.get(&id) {
                Some(word) => words.push(word.as_str()),
                None if id == self.special.unk => words.push("<unk>"),
                // Control ids carry no text
                None if control.contains(&id) => {}
                None => return Err(TokenizerError::InvalidTokenId(id)),
            }
        }
        Ok(words.join(" "))
    }

    fn vocab_size(&self) -> usize {
        self.vocab.len() + 4
    }

    fn token_to_id(&self, token: &str) -> Option<TokenId> {
        self.vocab.get(token).copied()
    }

    fn id_to_token(&self, id: TokenId) -> Option<&str> {
        self.id_to_word.get(&id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> WordTokenizer {
        WordTokenizer::from_words(&["hola", "mundo", "adios"], SpecialTokens::default()).unwrap()
    }

    #[test]
    fn test_encode_known_words() {
        let tok = tokenizer();
        let ids = tok.encode("hola mundo").unwrap();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn test_encode_unknown_word_maps_to_unk() {
        let tok = tokenizer();
        let ids = tok.encode("hola nada").unwrap();
        assert_eq!(ids, vec![4, SpecialTokens::default().unk]);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let tok = tokenizer();
        assert_eq!(
            tok.encode("adios mundo").unwrap(),
            tok.encode("adios mundo").unwrap()
        );
    }

    #[test]
    fn test_decode_roundtrip() {
        let tok = tokenizer();
        let ids = tok.encode("hola adios").unwrap();
        assert_eq!(tok.decode(&ids).unwrap(), "hola adios");
    }

    #[test]
    fn test_decode_skips_control_ids() {
        let tok = tokenizer();
        let special = SpecialTokens::default();
        let framed = vec![special.go, 4, 5, special.eos, special.pad];
        assert_eq!(tok.decode(&framed).unwrap(), "hola mundo");
    }

    #[test]
    fn test_decode_invalid_id() {
        let tok = tokenizer();
        let err = tok.decode(&[999]).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidTokenId(999)));
    }

    #[test]
    fn test_empty_vocab_rejected() {
        let err = WordTokenizer::from_words::<&str>(&[], SpecialTokens::default()).unwrap_err();
        assert!(matches!(err, TokenizerError::EmptyVocab));
    }

    #[test]
    fn test_reserved_id_rejected() {
        let err = WordTokenizer::new(
            vec![("hola".to_string(), 0)],
            SpecialTokens::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TokenizerError::ReservedId(_)));
    }

    #[test]
    fn test_token_id_lookups() {
        let tok = tokenizer();
        assert_eq!(tok.token_to_id("mundo"), Some(5));
        assert_eq!(tok.id_to_token(5), Some("mundo"));
        assert_eq!(tok.token_to_id("nada"), None);
        assert_eq!(tok.vocab_size(), 7);
    }
}
