//! Tokenizer seam
//!
//! Segmentation never looks inside tokens beyond suffix checks, so any
//! tokenizer works as long as concatenating its output reproduces the
//! input text (minus characters it documents as dropped).

use std::convert::Infallible;

/// Turns raw text into an ordered sequence of token strings
pub trait Tokenizer {
    /// Failure reported by the underlying tokenizer
    type Error: std::error::Error + Send + Sync + 'static;

    /// Split `text` into tokens in left-to-right order
    fn tokenize(&self, text: &str) -> Result<Vec<String>, Self::Error>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    type Error = T::Error;

    fn tokenize(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        (**self).tokenize(text)
    }
}

/// One token per Unicode scalar value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharTokenizer;

impl Tokenizer for CharTokenizer {
    type Error = Infallible;

    fn tokenize(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        Ok(text.chars().map(String::from).collect())
    }
}
