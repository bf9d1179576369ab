//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use spanseg_core::RuleRegistry;
use std::io::{self, Write};
use std::sync::Arc;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text files into delimiter-aligned spans
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a language rule file
    Validate(validate::ValidateArgs),

    /// Generate a language rule file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in languages and the identifiers accepted for each
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the listing to stdout
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the listing to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Languages => {
                let registry = RuleRegistry::builtin()?;
                let identifiers = registry.list_supported_identifiers();
                writeln!(out, "Supported languages:")?;
                for rules in registry.rule_sets() {
                    let aliases: Vec<&str> = identifiers
                        .iter()
                        .copied()
                        .filter(|id| registry.get(id).is_some_and(|r| Arc::ptr_eq(r, &rules)))
                        .collect();
                    writeln!(
                        out,
                        "  {:<4} {:<10} {}",
                        rules.code(),
                        rules.name(),
                        aliases.join(", ")
                    )?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                for (name, description) in process::OutputFormat::descriptions() {
                    writeln!(out, "  {name:<6} {description}")?;
                }
            }
        }
        Ok(())
    }
}
