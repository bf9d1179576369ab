//! High-level configuration API

use crate::error::{ApiError, Result};
use spanseg_core::{Rendering, DEFAULT_LANGUAGE};

/// Default token budget per segment
pub const DEFAULT_MAX_SEGMENT_SIZE: usize = 2000;

/// Segmentation settings shared by every call on a [`crate::Segmenter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language identifier (code, name or alias)
    pub language: String,
    /// Maximum number of tokens per segment
    pub max_segment_size: usize,
    /// Display text policy
    pub rendering: Rendering,
    /// Fail on unknown languages instead of falling back
    pub strict_language: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            max_segment_size: DEFAULT_MAX_SEGMENT_SIZE,
            rendering: Rendering::default(),
            strict_language: false,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Set the token budget per segment
    pub fn max_segment_size(mut self, size: usize) -> Self {
        self.config.max_segment_size = size;
        self
    }

    /// Set the display text policy
    pub fn rendering(mut self, rendering: Rendering) -> Self {
        self.config.rendering = rendering;
        self
    }

    /// Reject unknown languages instead of falling back to the default
    pub fn strict_language(mut self, strict: bool) -> Self {
        self.config.strict_language = strict;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.max_segment_size == 0 {
            return Err(ApiError::Config(
                "max_segment_size must be greater than zero".to_string(),
            ));
        }
        if self.config.language.trim().is_empty() {
            return Err(ApiError::Config("language must not be empty".to_string()));
        }

        Ok(self.config)
    }
}
