//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use spanseg_api::{Segmentation, SpanRecord};
use std::io::Write;
use std::path::Path;

/// Collects per-file span lists and writes them as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    files: Vec<FileSpans>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct FileSpans {
    /// Input file
    pub file: String,
    /// Name of the rule set applied
    pub language: String,
    /// True when the requested language was unknown
    pub fallback_used: bool,
    /// Character spans into the content text
    pub spans: Vec<SpanRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            files: Vec::new(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn write_file(&mut self, input: &Path, segmentation: &Segmentation) -> Result<()> {
        self.files.push(FileSpans {
            file: input.display().to_string(),
            language: segmentation.language.clone(),
            fallback_used: segmentation.fallback_used,
            spans: segmentation.span_records(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut self.writer, formatter);
        self.files.serialize(&mut serializer)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanseg_api::{segment_text, Span};

    #[test]
    fn test_json_per_file() {
        let segmentation = segment_text("One. Two.", "en", 5).unwrap();
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter
            .write_file(Path::new("in/one.txt"), &segmentation)
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        let parsed: Vec<FileSpans> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].language, "english");
        assert_eq!(
            parsed[0].spans,
            vec![SpanRecord::from(Span::new(0, 4)), SpanRecord::from(Span::new(4, 9))]
        );
        assert!(out.contains("\n    {\n        \"file\""));
    }
}
