//! Public API for spanseg delimiter-aligned text segmentation
//!
//! Wraps the core pipeline (resolve rules, tokenize, merge delimiter runs,
//! segment) behind a small stable interface.
//!
//! ```rust
//! use spanseg_api::{segment_text, Span};
//!
//! let result = segment_text("Hello world. This is a test.", "en", 16).unwrap();
//! assert_eq!(result.spans, vec![Span::new(0, 12), Span::new(12, 28)]);
//! assert!(!result.fallback_used);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
#[cfg(feature = "hf-tokenizer")]
pub mod hf;

use spanseg_core::{merge_tokens, ChunkSegmenter, Resolution, RuleRegistry};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder, DEFAULT_MAX_SEGMENT_SIZE};
pub use dto::{read_spans_json, spans_to_json, write_spans_json, Segmentation, SpanRecord};
pub use error::{ApiError, Result};
#[cfg(feature = "hf-tokenizer")]
pub use hf::{HfTokenizer, HfTokenizerError};
pub use spanseg_core::{CharTokenizer, Rendering, Span, Tokenizer};

/// Main entry point for segmentation
///
/// Holds the rule registry, a tokenizer and default settings. Cheap to share
/// across threads when the tokenizer is.
pub struct Segmenter<T = CharTokenizer> {
    registry: Arc<RuleRegistry>,
    tokenizer: T,
    config: Config,
}

impl Segmenter<CharTokenizer> {
    /// Character tokenizer, built-in languages, default settings
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Character tokenizer and built-in languages with custom settings
    pub fn with_config(config: Config) -> Result<Self> {
        let registry = RuleRegistry::builtin()?;
        Ok(Self::from_parts(Arc::new(registry), CharTokenizer, config))
    }
}

impl<T: Tokenizer> Segmenter<T> {
    /// Assemble a segmenter from an explicit registry and tokenizer
    pub fn from_parts(registry: Arc<RuleRegistry>, tokenizer: T, config: Config) -> Self {
        Self {
            registry,
            tokenizer,
            config,
        }
    }

    /// Segment with the configured language and budget
    pub fn segment(&self, text: &str) -> Result<Segmentation> {
        self.segment_with(text, &self.config.language, self.config.max_segment_size)
    }

    /// Segment with an explicit language and budget
    pub fn segment_with(
        &self,
        text: &str,
        language: &str,
        max_segment_size: usize,
    ) -> Result<Segmentation> {
        let chunker =
            ChunkSegmenter::new(max_segment_size)?.with_rendering(self.config.rendering.clone());

        let (rules, fallback_used) = match self.registry.resolve(language) {
            Resolution::Resolved(rules) => (rules, false),
            Resolution::FallbackUsed { requested, .. } if self.config.strict_language => {
                return Err(ApiError::UnknownLanguage { requested });
            }
            Resolution::FallbackUsed { rules, requested } => {
                tracing::warn!(
                    "unsupported language '{}', falling back to {}",
                    requested,
                    rules.name()
                );
                (rules, true)
            }
        };

        let tokens = self.tokenizer.tokenize(text).map_err(ApiError::tokenizer)?;
        let token_count = tokens.len();
        let tokens = merge_tokens(tokens, &rules);
        let merged_token_count = tokens.len();

        let document = chunker.segment(&tokens, &rules)?;
        tracing::debug!(
            language = rules.code(),
            tokens = token_count,
            merged = merged_token_count,
            segments = document.len(),
            "segmented text"
        );

        let spans = document.spans();
        Ok(Segmentation {
            spans,
            content: document.content,
            display: document.display,
            language: rules.name().to_string(),
            requested_language: language.to_string(),
            fallback_used,
            token_count,
            merged_token_count,
        })
    }

    /// Segment and write the spans as JSON to `path`, returning the path written
    pub fn segment_to_file(
        &self,
        text: &str,
        language: &str,
        path: impl AsRef<Path>,
        max_segment_size: usize,
    ) -> Result<PathBuf> {
        let segmentation = self.segment_with(text, language, max_segment_size)?;
        let path = path.as_ref();
        write_spans_json(path, &segmentation.spans)?;
        Ok(path.to_path_buf())
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the rule registry
    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    /// Get the tokenizer
    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }
}

impl<T> std::fmt::Debug for Segmenter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("config", &self.config)
            .field("languages", &self.registry.list_supported_identifiers())
            .finish_non_exhaustive()
    }
}

// Convenience functions

/// Segment text with the built-in rules and character tokenization
pub fn segment_text(text: &str, language: &str, max_segment_size: usize) -> Result<Segmentation> {
    Segmenter::new()?.segment_with(text, language, max_segment_size)
}

/// Segment text and write the span file
pub fn segment_text_to_file(
    text: &str,
    language: &str,
    path: impl AsRef<Path>,
    max_segment_size: usize,
) -> Result<PathBuf> {
    Segmenter::new()?.segment_to_file(text, language, path, max_segment_size)
}

/// Sorted identifiers accepted by the built-in registry
pub fn list_supported_languages() -> Result<Vec<String>> {
    let registry = RuleRegistry::builtin()?;
    Ok(registry
        .list_supported_identifiers()
        .into_iter()
        .map(String::from)
        .collect())
}
