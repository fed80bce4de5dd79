//! CLI error types for argument, generation and output failures.
//!
//! This module provides the [`CliError`] enum which wraps all possible errors
//! that can occur during a CLI run. Error messages say what went wrong and,
//! where there is one, how to fix it.

use std::fmt;
use std::io;

/// CLI error type encompassing all possible error conditions.
#[derive(Debug)]
pub enum CliError {
    /// An I/O error occurred while creating or writing the output.
    IoError {
        /// The underlying I/O error.
        source: io::Error,
        /// Path that caused the error, if known.
        path: Option<String>,
    },
    /// The CSV encoder failed while writing records.
    CsvWriteError {
        /// Description of the failure.
        message: String,
    },
    /// The generator rejected its configuration.
    GenerationError {
        /// The underlying cropgen error.
        source: cropgen::Error,
    },
    /// An invalid argument was provided.
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it's invalid.
        reason: String,
        /// Suggestion for valid values.
        suggestion: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError { source, path } => {
                if let Some(p) = path {
                    write!(f, "I/O error with file '{p}': {source}. ")?;
                    write!(
                        f,
                        "Check that the directory exists and you have write permissions."
                    )
                } else {
                    write!(f, "I/O error: {source}")
                }
            }
            CliError::CsvWriteError { message } => {
                write!(f, "CSV write error: {message}")
            }
            CliError::GenerationError { source } => {
                write!(f, "Dataset generation error: {source}")
            }
            CliError::InvalidArgument {
                argument,
                reason,
                suggestion,
            } => {
                write!(f, "Invalid argument '{argument}': {reason}")?;
                if let Some(s) = suggestion {
                    write!(f, ". {s}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::IoError { source, .. } => Some(source),
            CliError::GenerationError { source } => Some(source),
            CliError::CsvWriteError { .. } | CliError::InvalidArgument { .. } => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::IoError {
            source: err,
            path: None,
        }
    }
}

impl From<cropgen::Error> for CliError {
    fn from(err: cropgen::Error) -> Self {
        CliError::GenerationError { source: err }
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => CliError::from(source),
            _ => CliError::CsvWriteError { message },
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
