//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use spanseg_api::Segmentation;
use std::io::{self, Write};
use std::path::Path;

/// Writes the display text of every file, in input order
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn write_file(&mut self, _input: &Path, segmentation: &Segmentation) -> Result<()> {
        self.writer.write_all(segmentation.display.as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanseg_api::segment_text;

    #[test]
    fn test_writes_display_text() {
        let segmentation = segment_text("你好。再见！", "zh", 4).unwrap();
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .write_file(Path::new("a.txt"), &segmentation)
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(out, "你好。\n再见！\n");
    }
}
