//! Subword tokenization backed by a HuggingFace `tokenizer.json`

use spanseg_core::Tokenizer;
use std::path::Path;
use thiserror::Error;

/// Failure reported by the `tokenizers` crate
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HfTokenizerError {
    message: String,
}

impl HfTokenizerError {
    fn new(err: impl std::fmt::Display) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Wraps a pretrained tokenizer
///
/// Each token id is decoded on its own with special tokens skipped, so the
/// token strings carry the surface text the segmenter checks for delimiter
/// suffixes. Byte-level vocabularies may decode partial characters to
/// U+FFFD; character spans then refer to the decoded text.
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HfTokenizer {
    /// Load a `tokenizer.json`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HfTokenizerError> {
        let path = path.as_ref();
        let inner = tokenizers::Tokenizer::from_file(path).map_err(|e| {
            HfTokenizerError::new(format!("failed to load {}: {e}", path.display()))
        })?;
        Ok(Self { inner })
    }

    /// Wrap an already constructed tokenizer
    pub fn from_tokenizer(inner: tokenizers::Tokenizer) -> Self {
        Self { inner }
    }
}

impl std::fmt::Debug for HfTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfTokenizer")
            .field("vocab_size", &self.inner.get_vocab_size(true))
            .finish()
    }
}

impl Tokenizer for HfTokenizer {
    type Error = HfTokenizerError;

    fn tokenize(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(HfTokenizerError::new)?;

        let mut tokens = Vec::with_capacity(encoding.get_ids().len());
        for &id in encoding.get_ids() {
            let piece = self
                .inner
                .decode(&[id], true)
                .map_err(HfTokenizerError::new)?;
            if !piece.is_empty() {
                tokens.push(piece);
            }
        }

        tracing::trace!(ids = encoding.get_ids().len(), tokens = tokens.len(), "hf tokenize");
        Ok(tokens)
    }
}
