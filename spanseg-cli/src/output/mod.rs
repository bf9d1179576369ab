//! Output formatting module

use anyhow::Result;
use spanseg_api::Segmentation;
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Emit the segmentation of one input file
    fn write_file(&mut self, input: &Path, segmentation: &Segmentation) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod directory;
pub mod json;
pub mod text;

pub use directory::DirectoryWriter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
