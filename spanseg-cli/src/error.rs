//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input file matched any of the given patterns
    NoMatchingFiles(Vec<String>),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Segmentation of one input file failed
    ProcessingError {
        /// Input file
        file: String,
        /// Underlying failure
        message: String,
    },
    /// Two inputs map to the same output file
    OutputCollision {
        /// Output file already written in this run
        output: String,
        /// Input that would overwrite it
        input: String,
    },
    /// An output file would replace its own input
    OutputOverwritesInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoMatchingFiles(patterns) => {
                write!(f, "No files found matching: {}", patterns.join(", "))
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError { file, message } => {
                write!(f, "Failed to segment {file}: {message}")
            }
            CliError::OutputCollision { output, input } => {
                write!(f, "Output {output} already written; {input} has the same name")
            }
            CliError::OutputOverwritesInput(input) => {
                write!(f, "Refusing to overwrite input file {input}")
            }
        }
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matching_files_display() {
        let error = CliError::NoMatchingFiles(vec!["a/*.txt".to_string(), "b.txt".to_string()]);
        assert_eq!(error.to_string(), "No files found matching: a/*.txt, b.txt");
    }

    #[test]
    fn test_invalid_pattern_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError {
            file: "དཔེ་ཆ.txt".to_string(),
            message: "unable to find a delimiter".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to segment དཔེ་ཆ.txt: unable to find a delimiter"
        );
    }

    #[test]
    fn test_output_conflict_display() {
        let error = CliError::OutputCollision {
            output: "out/doc.json".to_string(),
            input: "y/doc.txt".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Output out/doc.json already written; y/doc.txt has the same name"
        );
        assert_eq!(
            CliError::OutputOverwritesInput("doc.txt".to_string()).to_string(),
            "Refusing to overwrite input file doc.txt"
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let result: anyhow::Result<()> = Err(CliError::ConfigError("bad".to_string()).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }
}
