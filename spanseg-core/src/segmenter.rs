//! Greedy delimiter-aligned chunking
//!
//! The segmenter walks the token sequence window by window. Each window
//! holds at most `max_segment_size` tokens; the segment is cut right after
//! the last token in the window that ends with a delimiter, so every
//! segment is as long as the budget allows while still ending on a
//! sentence or clause boundary.
//!
//! Spans are character offsets into the *content text*, the plain
//! concatenation of all segments. The *display text* is a separate
//! rendering controlled by [`Rendering`] and never affects span offsets.

use crate::error::{CoreError, Result};
use crate::rules::RuleSet;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open character range into the content text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// How segments are joined in the display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendering {
    /// Inserted between consecutive segments
    pub separator: String,
    /// Also emit the separator after the final segment
    pub trailing: bool,
}

impl Default for Rendering {
    /// One segment per line, newline-terminated
    fn default() -> Self {
        Self::lines()
    }
}

impl Rendering {
    /// One segment per line, including a final line break
    pub fn lines() -> Self {
        Self {
            separator: "\n".to_string(),
            trailing: true,
        }
    }

    /// No separator: the display text equals the content text
    pub fn concatenated() -> Self {
        Self {
            separator: String::new(),
            trailing: false,
        }
    }

    pub fn with_separator(separator: impl Into<String>, trailing: bool) -> Self {
        Self {
            separator: separator.into(),
            trailing,
        }
    }

    /// Join segment contents according to this policy
    pub fn render<'a, I>(&self, segments: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = String::new();
        let mut first = true;
        for segment in segments {
            if !first {
                out.push_str(&self.separator);
            }
            out.push_str(segment);
            first = false;
        }
        if self.trailing && !first {
            out.push_str(&self.separator);
        }
        out
    }
}

/// One delimiter-terminated segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Character offsets into the content text
    pub span: Span,
    /// Token indices covered by this segment
    pub tokens: Range<usize>,
    /// Concatenated token text
    pub content: String,
}

impl Segment {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Result of segmenting one token sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentedDocument {
    pub segments: Vec<Segment>,
    /// Separator-free concatenation; spans index into this
    pub content: String,
    /// Human oriented rendering of the segments
    pub display: String,
}

impl SegmentedDocument {
    pub fn spans(&self) -> Vec<Span> {
        self.segments.iter().map(|s| s.span).collect()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Consume into `(spans, display text)`
    pub fn into_parts(self) -> (Vec<Span>, String) {
        let spans = self.spans();
        (spans, self.display)
    }
}

/// Backward-scanning segmenter with a fixed token budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSegmenter {
    max_segment_size: usize,
    rendering: Rendering,
}

impl ChunkSegmenter {
    /// Create a segmenter; `max_segment_size` must be positive
    pub fn new(max_segment_size: usize) -> Result<Self> {
        if max_segment_size == 0 {
            return Err(CoreError::InvalidSegmentSize {
                size: max_segment_size,
            });
        }
        Ok(Self {
            max_segment_size,
            rendering: Rendering::default(),
        })
    }

    pub fn with_rendering(mut self, rendering: Rendering) -> Self {
        self.rendering = rendering;
        self
    }

    pub fn max_segment_size(&self) -> usize {
        self.max_segment_size
    }

    pub fn rendering(&self) -> &Rendering {
        &self.rendering
    }

    /// Cut `tokens` into delimiter-terminated segments
    ///
    /// Fails with [`CoreError::NoDelimiterFound`] as soon as a window holds
    /// no delimiter-terminated token; no partial result is returned.
    pub fn segment<S: AsRef<str>>(&self, tokens: &[S], rules: &RuleSet) -> Result<SegmentedDocument> {
        let total = tokens.len();
        if total == 0 {
            return Ok(SegmentedDocument::default());
        }

        tracing::debug!(
            language = rules.code(),
            tokens = total,
            max_segment_size = self.max_segment_size,
            "segmenting token sequence"
        );

        let mut segments = Vec::new();
        let mut content = String::new();
        let mut start_index = 0;
        let mut char_offset = 0;

        while start_index < total {
            let cut_index = self
                .find_cut(tokens, rules, start_index)
                .ok_or(CoreError::NoDelimiterFound {
                    start_index,
                    max_segment_size: self.max_segment_size,
                })?;

            let mut segment_text = String::new();
            for token in &tokens[start_index..cut_index] {
                segment_text.push_str(token.as_ref());
            }
            let segment_len = segment_text.chars().count();
            let span = Span::new(char_offset, char_offset + segment_len);

            tracing::trace!(
                start = span.start,
                end = span.end,
                tokens = cut_index - start_index,
                "segment"
            );

            content.push_str(&segment_text);
            segments.push(Segment {
                span,
                tokens: start_index..cut_index,
                content: segment_text,
            });

            char_offset += segment_len;
            start_index = cut_index;
        }

        let display = self
            .rendering
            .render(segments.iter().map(|s| s.content.as_str()));

        Ok(SegmentedDocument {
            segments,
            content,
            display,
        })
    }

    /// Index one past the rightmost delimiter-terminated token in the window
    fn find_cut<S: AsRef<str>>(&self, tokens: &[S], rules: &RuleSet, start: usize) -> Option<usize> {
        let upper_bound = tokens.len().min(start.saturating_add(self.max_segment_size));
        (start..upper_bound)
            .rev()
            .find(|&idx| rules.ends_with_delimiter(tokens[idx].as_ref()))
            .map(|idx| idx + 1)
    }
}

/// Segment with the default line-per-segment rendering
pub fn segment_tokens<S: AsRef<str>>(
    tokens: &[S],
    rules: &RuleSet,
    max_segment_size: usize,
) -> Result<SegmentedDocument> {
    ChunkSegmenter::new(max_segment_size)?.segment(tokens, rules)
}
