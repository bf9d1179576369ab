//! Validate command implementation

use anyhow::Result;
use clap::Args;
use spanseg_core::{RuleConfig, RuleSet};
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language rule file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        match Self::load(&self.language_config) {
            Ok((config, rules)) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", rules.code());
                println!("  Language name: {}", rules.name());
                if !config.metadata.aliases.is_empty() {
                    println!("  Aliases: {}", config.metadata.aliases.join(", "));
                }
                println!("  Delimiters: {}", rules.delimiters().join(" "));
                println!(
                    "  Merge templates: {} ({} expanded patterns)",
                    rules.templates().len(),
                    rules.patterns().len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }

    fn load(path: &Path) -> spanseg_core::Result<(RuleConfig, RuleSet)> {
        let config = RuleConfig::from_file(path)?;
        let rules = config.to_rule_set()?;
        Ok((config, rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args_for(content: &str) -> (NamedTempFile, ValidateArgs) {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        let args = ValidateArgs {
            language_config: temp_file.path().to_path_buf(),
        };
        (temp_file, args)
    }

    #[test]
    fn test_validate_valid_config() {
        let (_file, args) = args_for(
            r#"
[metadata]
code = "bo"
name = "tibetan"

[delimiters]
suffixes = ["།", "༔"]

[merge]
templates = [{ pattern = ["<delim>", " ", "<delim>"] }]
"#,
        );
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_empty_code() {
        let (_file, args) = args_for(
            r#"
[metadata]
code = ""
name = "Test"

[delimiters]
suffixes = ["."]
"#,
        );
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_duplicate_delimiter() {
        let (_file, args) = args_for(
            r#"
[metadata]
code = "xx"
name = "Test"

[delimiters]
suffixes = [".", "."]
"#,
        );
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("duplicate delimiter"));
    }
}
