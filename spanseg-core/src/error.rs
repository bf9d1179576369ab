//! Core error types (deterministic only)

use thiserror::Error;

/// Errors raised by rule construction and segmentation
#[derive(Debug, Error)]
pub enum CoreError {
    /// The segment budget was zero
    #[error("max_segment_size must be a positive integer, got {size}")]
    InvalidSegmentSize {
        /// The rejected size
        size: usize,
    },

    /// No delimiter-terminated token exists in the current scan window
    #[error(
        "unable to find a delimiter within {max_segment_size} tokens starting at index {start_index}"
    )]
    NoDelimiterFound {
        /// First token index of the failing window
        start_index: usize,
        /// Size of the failing window
        max_segment_size: usize,
    },

    /// Invalid rule configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Rule file could not be read
    #[error("failed to read rule file {path}: {source}")]
    Io {
        /// Path of the rule file
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not valid TOML for the rule schema
    #[error("failed to parse rule config {name}: {source}")]
    Parse {
        /// File path or embedded config name
        name: String,
        /// Underlying TOML failure
        #[source]
        source: toml::de::Error,
    },
}

impl CoreError {
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        CoreError::Configuration(msg.into())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delimiter_display() {
        let error = CoreError::NoDelimiterFound {
            start_index: 12,
            max_segment_size: 4,
        };
        assert_eq!(
            error.to_string(),
            "unable to find a delimiter within 4 tokens starting at index 12"
        );
    }

    #[test]
    fn test_invalid_segment_size_display() {
        let error = CoreError::InvalidSegmentSize { size: 0 };
        assert!(error.to_string().contains("positive integer"));
    }
}
