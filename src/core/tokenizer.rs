//! Token extraction and numeric classification
//!
//! Content is split on runs of whitespace. A token is numeric when removing at
//! most one '.' leaves a non-empty run of ASCII digits, so `42`, `3.5`, `.5`
//! and `5.` are numeric while `-5`, `1.2.3`, `.` and `4a` are not.
//!
//! Usage:
//! ```rust
//! use filesum::core::tokenizer::{classify, TokenClass};
//!
//! assert_eq!(classify("42"), TokenClass::Integer);
//! assert_eq!(classify("3.5"), TokenClass::Decimal);
//! assert_eq!(classify("abc"), TokenClass::Other);
//! ```

use std::fmt;
use std::str::FromStr;

/// How a single token is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// All ASCII digits
    Integer,
    /// ASCII digits with exactly one embedded '.'
    Decimal,
    /// Anything else
    Other,
}

/// What to do with numeric tokens that contain a decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalPolicy {
    /// Treat decimal tokens as non-numeric and discard them
    #[default]
    Skip,
    /// Keep the integer part (`3.5` -> 3, `.5` -> 0)
    Truncate,
    /// Fail the whole file on the first decimal token
    Reject,
}

impl DecimalPolicy {
    /// List all available policies
    pub fn available_policies() -> &'static [&'static str] {
        &["skip", "truncate", "reject"]
    }
}

impl fmt::Display for DecimalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecimalPolicy::Skip => "skip",
            DecimalPolicy::Truncate => "truncate",
            DecimalPolicy::Reject => "reject",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DecimalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" | "ignore" => Ok(DecimalPolicy::Skip),
            "truncate" | "trunc" => Ok(DecimalPolicy::Truncate),
            "reject" | "error" => Ok(DecimalPolicy::Reject),
            _ => Err(format!(
                "Unknown decimal policy: {}. Available: {}",
                s,
                DecimalPolicy::available_policies().join(", ")
            )),
        }
    }
}

/// Split content into whitespace-delimited tokens, discarding empties
pub fn tokens(content: &str) -> impl Iterator<Item = &str> {
    content.split_whitespace()
}

/// Classify a token
pub fn classify(token: &str) -> TokenClass {
    let mut dots = 0;
    let mut digits = 0;

    for b in token.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return TokenClass::Other,
        }
    }

    match (digits, dots) {
        (0, _) => TokenClass::Other,
        (_, 0) => TokenClass::Integer,
        (_, 1) => TokenClass::Decimal,
        _ => TokenClass::Other,
    }
}

/// Integer part of a decimal token (`"12.34"` -> `"12"`, `".5"` -> `"0"`)
pub fn integer_part(token: &str) -> &str {
    match token.split_once('.') {
        Some(("", _)) => "0",
        Some((whole, _)) => whole,
        None => token,
    }
}
