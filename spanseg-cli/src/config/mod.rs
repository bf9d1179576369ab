//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spanseg_api::{Rendering, DEFAULT_MAX_SEGMENT_SIZE};
use spanseg_core::DEFAULT_LANGUAGE;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load from a TOML file; missing sections keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Display text policy described by the `[output]` section
    pub fn rendering(&self) -> Rendering {
        Rendering::with_separator(
            self.output.separator.clone(),
            self.output.trailing_separator,
        )
    }
}

/// Processing-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Language used when `--language` is not given
    pub default_language: String,

    /// Token budget used when `--max-segment-size` is not given
    pub max_segment_size: usize,

    /// Remove line breaks before tokenizing
    pub join_lines: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            max_segment_size: DEFAULT_MAX_SEGMENT_SIZE,
            join_lines: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Inserted between segments in the display text
    pub separator: String,

    /// Also emit the separator after the last segment
    pub trailing_separator: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let rendering = Rendering::default();
        Self {
            separator: rendering.separator,
            trailing_separator: rendering.trailing,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads for `--parallel` (0 = auto)
    pub worker_threads: usize,
}
