//! Per-language segmentation rules
//!
//! A [`RuleSet`] bundles the delimiters that may close a segment with the
//! merge templates that normalize delimiter runs before segmentation. Rule
//! sets are immutable once built and are shared through [`RuleRegistry`].

pub mod config;
pub mod registry;

pub use config::{DelimiterConfig, MergeConfig, MetadataConfig, RuleConfig, TemplateConfig};
pub use registry::{Resolution, RuleRegistry, RuleRegistryBuilder, DEFAULT_LANGUAGE};

use crate::error::{CoreError, Result};
use crate::expander::{self, Pattern};
use std::fmt;

/// Placeholder used in rule files for "the active delimiter"
pub const DELIMITER_PLACEHOLDER: &str = "<delim>";

/// One position of a merge template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplateToken {
    /// Matches exactly this token text
    Literal(String),
    /// Matches the delimiter the template is being instantiated for
    Delimiter,
}

impl TemplateToken {
    /// Parse a rule-file entry, mapping [`DELIMITER_PLACEHOLDER`] to the wildcard
    pub fn parse(raw: &str) -> Self {
        if raw == DELIMITER_PLACEHOLDER {
            TemplateToken::Delimiter
        } else {
            TemplateToken::Literal(raw.to_string())
        }
    }
}

impl fmt::Display for TemplateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateToken::Literal(text) => write!(f, "{text:?}"),
            TemplateToken::Delimiter => f.write_str(DELIMITER_PLACEHOLDER),
        }
    }
}

/// Token pattern that collapses into a single token when matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTemplate {
    name: String,
    tokens: Vec<TemplateToken>,
}

impl MergeTemplate {
    /// Create a template from already parsed positions
    pub fn new(name: impl Into<String>, tokens: Vec<TemplateToken>) -> Self {
        Self {
            name: name.into(),
            tokens,
        }
    }

    /// Create a template from rule-file strings
    pub fn from_strs<I, S>(name: impl Into<String>, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = raw
            .into_iter()
            .map(|s| TemplateToken::parse(s.as_ref()))
            .collect();
        Self::new(name, tokens)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Immutable segmentation rules for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    code: String,
    name: String,
    delimiters: Vec<String>,
    templates: Vec<MergeTemplate>,
    /// Expanded once; the rule set never changes afterwards
    patterns: Vec<Pattern>,
}

impl RuleSet {
    /// Build and validate a rule set
    ///
    /// Delimiters keep their configured order. Empty or duplicate delimiters
    /// and empty templates are rejected.
    pub fn new<D, S>(
        code: impl Into<String>,
        name: impl Into<String>,
        delimiters: D,
        templates: Vec<MergeTemplate>,
    ) -> Result<Self>
    where
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let code = code.into();
        let name = name.into();
        let delimiters: Vec<String> = delimiters.into_iter().map(Into::into).collect();

        if code.trim().is_empty() {
            return Err(CoreError::configuration("language code must not be empty"));
        }
        if delimiters.is_empty() {
            return Err(CoreError::configuration(format!(
                "no delimiters defined for '{code}'"
            )));
        }
        for (i, delimiter) in delimiters.iter().enumerate() {
            if delimiter.is_empty() {
                return Err(CoreError::configuration(format!(
                    "empty delimiter in '{code}'"
                )));
            }
            if delimiters[..i].contains(delimiter) {
                return Err(CoreError::configuration(format!(
                    "duplicate delimiter {delimiter:?} in '{code}'"
                )));
            }
        }
        if let Some(template) = templates.iter().find(|t| t.is_empty()) {
            return Err(CoreError::configuration(format!(
                "merge template '{}' in '{code}' has no tokens",
                template.name()
            )));
        }

        let patterns = expander::expand_templates(&delimiters, &templates);

        Ok(Self {
            code,
            name,
            delimiters,
            templates,
            patterns,
        })
    }

    /// Primary language code (e.g. `en`)
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human readable name (e.g. `english`)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    pub fn templates(&self) -> &[MergeTemplate] {
        &self.templates
    }

    /// Concrete merge patterns in first-match priority order
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Whether token merging is enabled for this language
    pub fn has_merge_rules(&self) -> bool {
        !self.templates.is_empty()
    }

    /// True when `token` ends with any configured delimiter
    #[inline]
    pub fn ends_with_delimiter(&self, token: &str) -> bool {
        self.delimiters.iter().any(|d| token.ends_with(d.as_str()))
    }
}
