//! Per-file output into a directory

use super::OutputFormatter;
use crate::error::CliError;
use crate::input::FileReader;
use anyhow::{Context, Result};
use spanseg_api::{write_spans_json, Segmentation};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `<stem>.json` span files, plus `<stem>.txt` display text when enabled
pub struct DirectoryWriter {
    dir: PathBuf,
    write_text: bool,
    written: Vec<PathBuf>,
}

impl DirectoryWriter {
    /// Create the writer; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>, write_text: bool) -> Self {
        Self {
            dir: dir.into(),
            write_text,
            written: Vec::new(),
        }
    }

    /// Paths written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Reject targets already written in this run or pointing at the input itself
    fn check_target(&self, target: &Path, input: &Path) -> Result<()> {
        if self.written.iter().any(|path| path == target) {
            return Err(CliError::OutputCollision {
                output: target.display().to_string(),
                input: input.display().to_string(),
            }
            .into());
        }
        if target.exists() {
            let same_file = match (fs::canonicalize(target), fs::canonicalize(input)) {
                (Ok(target), Ok(input)) => target == input,
                _ => false,
            };
            if same_file {
                return Err(CliError::OutputOverwritesInput(input.display().to_string()).into());
            }
        }
        Ok(())
    }
}

impl OutputFormatter for DirectoryWriter {
    fn write_file(&mut self, input: &Path, segmentation: &Segmentation) -> Result<()> {
        let stem = FileReader::output_stem(input);

        let json_path = self.dir.join(format!("{stem}.json"));
        let text_path = self.dir.join(format!("{stem}.txt"));
        self.check_target(&json_path, input)?;
        if self.write_text {
            self.check_target(&text_path, input)?;
        }

        write_spans_json(&json_path, &segmentation.spans)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        self.written.push(json_path);

        if self.write_text {
            fs::write(&text_path, &segmentation.display)
                .with_context(|| format!("Failed to write {}", text_path.display()))?;
            self.written.push(text_path);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        log::info!(
            "Wrote {} file(s) to {}",
            self.written.len(),
            self.dir.display()
        );
        Ok(())
    }
}
