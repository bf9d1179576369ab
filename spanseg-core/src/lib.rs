//! Delimiter-aligned segmentation of token sequences
//!
//! Splits tokenized text into segments of at most `max_segment_size`
//! tokens, where every segment ends on a language-specific delimiter.
//! Segments are reported as character spans into the separator-free
//! concatenation of the input tokens.
//!
//! # Pipeline
//!
//! 1. Resolve a language identifier to a [`RuleSet`] via [`RuleRegistry`]
//! 2. Collapse delimiter runs with [`merge_tokens`] (only for languages with
//!    merge templates, e.g. Tibetan)
//! 3. Cut the token sequence with [`ChunkSegmenter`]
//!
//! # Example
//!
//! ```rust
//! use spanseg_core::{merge_tokens, segment_tokens, CharTokenizer, RuleRegistry, Span, Tokenizer};
//!
//! let registry = RuleRegistry::builtin().unwrap();
//! let rules = registry.resolve("en").into_rules();
//!
//! let tokens = CharTokenizer.tokenize("Hello world. This is a test.").unwrap();
//! let tokens = merge_tokens(tokens, &rules);
//! let doc = segment_tokens(&tokens, &rules, 16).unwrap();
//!
//! assert_eq!(doc.spans(), vec![Span::new(0, 12), Span::new(12, 28)]);
//! assert_eq!(doc.display, "Hello world.\n This is a test.\n");
//! ```

pub mod error;
pub mod expander;
pub mod merger;
pub mod rules;
pub mod segmenter;
pub mod tokenizer;

pub use error::{CoreError, Result};
pub use expander::{expand, Pattern};
pub use merger::merge_tokens;
pub use rules::{
    MergeTemplate, Resolution, RuleConfig, RuleRegistry, RuleRegistryBuilder, RuleSet,
    TemplateToken, DEFAULT_LANGUAGE,
};
pub use segmenter::{segment_tokens, ChunkSegmenter, Rendering, Segment, SegmentedDocument, Span};
pub use tokenizer::{CharTokenizer, Tokenizer};
