//! Data Transfer Objects for API

use crate::error::Result;
use serde::{Deserialize, Serialize};
use spanseg_core::{Segment, Span};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Result of segmenting one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Character spans into [`Segmentation::content`]
    pub spans: Vec<Span>,
    /// Separator-free concatenation of all segments
    pub content: String,
    /// Segments joined by the configured rendering
    pub display: String,
    /// Name of the rule set actually applied
    pub language: String,
    /// Identifier the caller asked for
    pub requested_language: String,
    /// True when `requested_language` was unknown and the default was applied
    pub fallback_used: bool,
    /// Tokens produced by the tokenizer
    pub token_count: usize,
    /// Tokens left after merging delimiter runs
    pub merged_token_count: usize,
}

impl Segmentation {
    /// Number of segments
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True for empty input
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Text of each segment, sliced from the content text
    pub fn segments(&self) -> Vec<&str> {
        let mut boundaries: Vec<usize> = self.content.char_indices().map(|(i, _)| i).collect();
        boundaries.push(self.content.len());
        self.spans
            .iter()
            .filter_map(|span| {
                let start = *boundaries.get(span.start)?;
                let end = *boundaries.get(span.end)?;
                self.content.get(start..end)
            })
            .collect()
    }

    /// Span records in persisted form
    pub fn span_records(&self) -> Vec<SpanRecord> {
        self.spans.iter().copied().map(SpanRecord::from).collect()
    }
}

/// Persisted form of one span: `{"span": {"start": .., "end": ..}}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRecord {
    /// Character range into the content text
    pub span: Span,
}

impl From<Span> for SpanRecord {
    fn from(span: Span) -> Self {
        Self { span }
    }
}

impl From<&Segment> for SpanRecord {
    fn from(segment: &Segment) -> Self {
        Self { span: segment.span }
    }
}

/// Serialize spans as a 4-space indented JSON array
pub fn spans_to_json(spans: &[Span]) -> Result<String> {
    let records: Vec<SpanRecord> = spans.iter().copied().map(SpanRecord::from).collect();
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write spans as JSON to `path`, creating parent directories
pub fn write_spans_json(path: impl AsRef<Path>, spans: &[Span]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = spans_to_json(spans)?;
    let mut file = fs::File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    tracing::debug!(path = %path.display(), spans = spans.len(), "wrote span file");
    Ok(())
}

/// Read a span file written by [`write_spans_json`]
pub fn read_spans_json(path: impl AsRef<Path>) -> Result<Vec<Span>> {
    let content = fs::read_to_string(path)?;
    let records: Vec<SpanRecord> = serde_json::from_str(&content)?;
    Ok(records.into_iter().map(|r| r.span).collect())
}
