//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for file processing
///
/// Safe to share across rayon workers; all methods take `&self`.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Show a bar over `total_files` unless `quiet` or only one file is processed
    pub fn new(quiet: bool, total_files: u64) -> Self {
        if quiet || total_files < 2 {
            return Self { progress_bar: None };
        }

        let pb = ProgressBar::new(total_files);
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(err) => log::debug!("Falling back to default progress style: {err}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    /// Whether a bar is displayed
    pub fn is_visible(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Segmented: {filename}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_when_quiet_or_single_file() {
        assert!(!ProgressReporter::new(true, 10).is_visible());
        assert!(!ProgressReporter::new(false, 1).is_visible());
    }

    #[test]
    fn test_visible_for_many_files() {
        let reporter = ProgressReporter::new(false, 3);
        assert!(reporter.is_visible());
        reporter.file_completed("a.txt");
        reporter.finish();
    }
}
