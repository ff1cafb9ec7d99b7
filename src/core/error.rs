//! Error types for the core operations
//!
//! Both entry points share the same shape: a missing file, any other I/O
//! failure, and (for summing) content-level failures.

use std::io;
use thiserror::Error;

/// Errors returned by [`load_content`](crate::core::loader::load_content)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("File '{0}' not found.")]
    FileNotFound(String),

    #[error("{0}")]
    IoFailure(String),
}

impl LoadError {
    /// Classify an I/O error raised while reading `path`
    pub fn from_io(path: &str, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_string()),
            _ => LoadError::IoFailure(format!("Cannot read '{}': {}", path, err)),
        }
    }

    /// Stable error code for the result model
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::FileNotFound(_) => "FILE_NOT_FOUND",
            LoadError::IoFailure(_) => "IO_FAILURE",
        }
    }
}

/// Errors returned by [`parse_and_sum`](crate::core::aggregate::parse_and_sum)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("File '{0}' not found.")]
    FileNotFound(String),

    #[error("{0}")]
    IoFailure(String),

    #[error("No valid numbers found.")]
    NoValidNumbers,

    #[error("Decimal number '{0}' is not allowed.")]
    DecimalToken(String),

    #[error("Number '{0}' is too large.")]
    NumberTooLarge(String),

    #[error("Sum is too large.")]
    SumOverflow,
}

impl ParseError {
    /// Stable error code for the result model
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::FileNotFound(_) => "FILE_NOT_FOUND",
            ParseError::IoFailure(_) => "IO_FAILURE",
            ParseError::NoValidNumbers => "NO_VALID_NUMBERS",
            ParseError::DecimalToken(_) => "DECIMAL_TOKEN",
            ParseError::NumberTooLarge(_) => "NUMBER_TOO_LARGE",
            ParseError::SumOverflow => "SUM_OVERFLOW",
        }
    }
}

impl From<LoadError> for ParseError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::FileNotFound(path) => ParseError::FileNotFound(path),
            LoadError::IoFailure(detail) => ParseError::IoFailure(detail),
        }
    }
}
