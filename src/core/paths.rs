//! Path input handling for the command line
//!
//! Cleans up user-typed paths, resolves them against the root directory, and
//! applies the optional file name policy.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Simple `.txt` file names: letters, digits, '_' and '-'
pub static TXT_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_\-]+\.txt$").expect("Invalid TXT_NAME_RE regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid file name '{0}': expected letters, digits, '_' or '-' followed by .txt")]
pub struct InvalidFileName(pub String);

impl InvalidFileName {
    pub fn code(&self) -> &'static str {
        "INVALID_FILE_NAME"
    }
}

/// Which file names are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// Any file name
    #[default]
    Any,
    /// Only names matching [`TXT_NAME_RE`]
    RequireTxt,
}

impl NamePolicy {
    /// Check the final component of `path` against the policy
    pub fn check(&self, path: &Path) -> Result<(), InvalidFileName> {
        match self {
            NamePolicy::Any => Ok(()),
            NamePolicy::RequireTxt => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if TXT_NAME_RE.is_match(&name) {
                    Ok(())
                } else {
                    Err(InvalidFileName(name))
                }
            }
        }
    }
}

/// Trim whitespace and one pair of matching surrounding quotes.
///
/// Paths copied from file managers often arrive as `"C:\dir\file.txt"`.
pub fn clean_input(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].trim();
        }
    }
    trimmed
}

/// Resolve a path against the root directory unless it is absolute
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
