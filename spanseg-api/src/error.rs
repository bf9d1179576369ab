//! API error types

use spanseg_core::CoreError;
use thiserror::Error;

/// Boxed failure from a [`spanseg_core::Tokenizer`] implementation
pub type TokenizerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rule or segmentation error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The tokenizer rejected the input
    #[error("tokenizer error: {0}")]
    Tokenizer(#[source] TokenizerError),

    /// Language not registered while strict language resolution is enabled
    #[error("unsupported language '{requested}'")]
    UnknownLanguage {
        /// Identifier as given by the caller
        requested: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    pub(crate) fn tokenizer<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ApiError::Tokenizer(Box::new(err))
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
