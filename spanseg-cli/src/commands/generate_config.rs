//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the delimiters and merge templates for your language");
        println!("2. Validate your configuration:");
        println!("   spanseg validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   spanseg process -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Segmentation rules for {code}

[metadata]
code = "{code}"
name = "custom-{code}"
# Extra identifiers that resolve to this language
aliases = []

# A token ending with any of these closes a segment
[delimiters]
suffixes = [".", "!", "?"]

# Token runs collapsed into a single token before segmentation.
# "<delim>" stands for the same delimiter at every position of one match;
# earlier templates win when several match at the same position.
[merge]
templates = [
    # {{ pattern = ["<delim>", " ", "<delim>"], name = "delimiter_space_delimiter" }},
]
"#,
            code = self.language_code
        )
    }
}
