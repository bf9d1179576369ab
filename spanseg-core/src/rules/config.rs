//! Rule file schema
//!
//! Rule sets are described in TOML. Built-in languages are embedded at
//! compile time; custom languages are loaded from disk with
//! [`RuleConfig::from_file`].

use super::{MergeTemplate, RuleSet};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root of a rule file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub metadata: MetadataConfig,
    pub delimiters: DelimiterConfig,
    #[serde(default)]
    pub merge: MergeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
    /// Extra identifiers resolving to this rule set (e.g. ISO 639-3 codes)
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelimiterConfig {
    pub suffixes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeConfig {
    #[serde(default)]
    pub templates: Vec<TemplateConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub pattern: Vec<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl RuleConfig {
    /// Parse a rule file; `name` only labels errors
    pub fn from_toml_str(toml_str: &str, name: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|source| CoreError::Parse {
            name: name.to_string(),
            source,
        })
    }

    /// Read and parse a rule file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Check metadata; delimiter and template checks happen in [`RuleSet::new`]
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(CoreError::configuration("metadata.code must not be empty"));
        }
        if self.metadata.name.trim().is_empty() {
            return Err(CoreError::configuration("metadata.name must not be empty"));
        }
        if self.metadata.aliases.iter().any(|a| a.trim().is_empty()) {
            return Err(CoreError::configuration(format!(
                "empty alias in '{}'",
                self.metadata.code
            )));
        }
        Ok(())
    }

    /// Build the immutable rule set described by this config
    pub fn to_rule_set(&self) -> Result<RuleSet> {
        self.validate()?;

        let templates = self
            .merge
            .templates
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let name = t.name.clone().unwrap_or_else(|| format!("template_{i}"));
                MergeTemplate::from_strs(name, &t.pattern)
            })
            .collect();

        RuleSet::new(
            self.metadata.code.clone(),
            self.metadata.name.clone(),
            self.delimiters.suffixes.iter().cloned(),
            templates,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::TemplateToken;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TIBETAN: &str = r#"
        [metadata]
        code = "bo"
        name = "tibetan"
        aliases = ["bod"]

        [delimiters]
        suffixes = ["།", "༔", "༎"]

        [merge]
        templates = [
            { pattern = ["<delim>", " ", "<delim>"], name = "shad_space_shad" },
            { pattern = ["<delim>", "<delim>", " ", "<delim>", "<delim>"] },
        ]
    "#;

    #[test]
    fn test_rule_config_deserialize() {
        let config = RuleConfig::from_toml_str(TIBETAN, "tibetan").unwrap();
        assert_eq!(config.metadata.code, "bo");
        assert_eq!(config.metadata.aliases, vec!["bod"]);
        assert_eq!(config.delimiters.suffixes.len(), 3);
        assert_eq!(config.merge.templates.len(), 2);
        assert_eq!(config.merge.templates[1].name, None);
    }

    #[test]
    fn test_to_rule_set() {
        let rules = RuleConfig::from_toml_str(TIBETAN, "tibetan")
            .unwrap()
            .to_rule_set()
            .unwrap();
        assert_eq!(rules.templates()[0].name(), "shad_space_shad");
        assert_eq!(rules.templates()[1].name(), "template_1");
        assert_eq!(rules.templates()[0].tokens()[0], TemplateToken::Delimiter);
        assert_eq!(rules.patterns().len(), 6);
    }

    #[test]
    fn test_merge_section_is_optional() {
        let config = RuleConfig::from_toml_str(
            r#"
            [metadata]
            code = "en"
            name = "english"

            [delimiters]
            suffixes = ["."]
            "#,
            "inline",
        )
        .unwrap();
        let rules = config.to_rule_set().unwrap();
        assert!(!rules.has_merge_rules());
        assert!(config.metadata.aliases.is_empty());
    }

    #[test]
    fn test_empty_code_rejected() {
        let config = RuleConfig::from_toml_str(
            r#"
            [metadata]
            code = ""
            name = "test"

            [delimiters]
            suffixes = ["."]
            "#,
            "inline",
        )
        .unwrap();
        assert!(matches!(
            config.to_rule_set(),
            Err(CoreError::Configuration(_))
        ));
    }

    #[test]
    fn test_missing_delimiters_is_parse_error() {
        let err = RuleConfig::from_toml_str(
            r#"
            [metadata]
            code = "xx"
            name = "test"
            "#,
            "broken.toml",
        )
        .unwrap_err();
        match err {
            CoreError::Parse { name, .. } => assert_eq!(name, "broken.toml"),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{TIBETAN}").unwrap();
        let config = RuleConfig::from_file(file.path()).unwrap();
        assert_eq!(config.metadata.name, "tibetan");
    }

    #[test]
    fn test_from_missing_file() {
        let err = RuleConfig::from_file("/nonexistent/rules.toml").unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/rules.toml"));
    }
}
