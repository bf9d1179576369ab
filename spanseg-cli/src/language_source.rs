//! Language source management for CLI

use crate::error::CliError;
use anyhow::{Context, Result};
use spanseg_core::{RuleConfig, RuleRegistry};
use std::path::PathBuf;

/// Source of language rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Built-in language, by code, name or alias
    BuiltIn(String),
    /// External rule file, registered next to the built-ins
    External {
        /// Path to the rule file
        path: PathBuf,
        /// Optional language code override
        language_code: Option<String>,
    },
}

/// Registry plus the identifier to segment with
#[derive(Debug)]
pub struct LoadedLanguage {
    /// Built-ins, plus the external rules when given
    pub registry: RuleRegistry,
    /// Identifier to resolve for every input file
    pub language: String,
}

impl LanguageSource {
    /// Pick the source from the `process` arguments
    pub fn from_args(
        language: &str,
        language_config: Option<PathBuf>,
        language_code: Option<String>,
    ) -> Result<Self> {
        match (language_config, language_code) {
            (Some(path), language_code) => Ok(LanguageSource::External {
                path,
                language_code,
            }),
            (None, Some(_)) => Err(CliError::ConfigError(
                "--language-code requires --language-config".to_string(),
            )
            .into()),
            (None, None) => Ok(LanguageSource::BuiltIn(language.to_string())),
        }
    }

    /// Build the registry for this source
    pub fn load(&self) -> Result<LoadedLanguage> {
        match self {
            LanguageSource::BuiltIn(language) => Ok(LoadedLanguage {
                registry: RuleRegistry::builtin()?,
                language: language.clone(),
            }),
            LanguageSource::External {
                path,
                language_code,
            } => {
                let mut config = RuleConfig::from_file(path)?;
                if let Some(code) = language_code {
                    config.metadata.code = code.clone();
                }
                let language = config.metadata.code.clone();

                let registry = RuleRegistry::builder()
                    .with_builtins()?
                    .register_config(&config)
                    .with_context(|| format!("Invalid language config: {}", path.display()))?
                    .build()?;

                log::info!(
                    "Loaded external language '{}' ({}) from {}",
                    config.metadata.name,
                    language,
                    path.display()
                );
                Ok(LoadedLanguage { registry, language })
            }
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(language) => format!("Built-in: {language}"),
            LanguageSource::External {
                path,
                language_code,
            } => {
                if let Some(code) = language_code {
                    format!("External: {} (code: {})", path.display(), code)
                } else {
                    format!("External: {}", path.display())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DZONGKHA: &str = r#"
[metadata]
code = "dz"
name = "dzongkha"

[delimiters]
suffixes = ["།"]
"#;

    #[test]
    fn test_builtin_source() {
        let source = LanguageSource::from_args("tibetan", None, None).unwrap();
        assert_eq!(source, LanguageSource::BuiltIn("tibetan".to_string()));
        assert_eq!(source.display_name(), "Built-in: tibetan");

        let loaded = source.load().unwrap();
        assert_eq!(loaded.language, "tibetan");
        assert!(loaded.registry.contains("bo"));
    }

    #[test]
    fn test_external_source_with_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dzongkha.toml");
        fs::write(&path, DZONGKHA).unwrap();

        let source =
            LanguageSource::from_args("en", Some(path.clone()), Some("dzo".to_string())).unwrap();
        assert!(source.display_name().contains("(code: dzo)"));

        let loaded = source.load().unwrap();
        assert_eq!(loaded.language, "dzo");
        assert_eq!(loaded.registry.resolve("dzongkha").rules().code(), "dzo");
        assert!(loaded.registry.contains("zh"));
    }

    #[test]
    fn test_code_without_config_rejected() {
        let err = LanguageSource::from_args("en", None, Some("xx".to_string())).unwrap_err();
        assert!(err.to_string().contains("--language-config"));
    }

    #[test]
    fn test_missing_external_file() {
        let source = LanguageSource::External {
            path: PathBuf::from("/nonexistent/lang.toml"),
            language_code: None,
        };
        assert!(source.load().is_err());
    }
}
