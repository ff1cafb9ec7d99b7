//! Unified file reading
//!
//! Provides consistent handling for:
//! - Missing files and other I/O failures
//! - Non-UTF-8 files
//! - Oversized files
//! - Binary files

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::error::LoadError;
use crate::core::model::{FilesumError, Meta, ResultItem};
use crate::core::util::file_meta;

/// Size limit the CLI applies unless told otherwise (64 MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Number of leading bytes inspected for NUL bytes
const BINARY_SNIFF_LEN: usize = 8192;

/// Strategy for handling non-UTF-8 content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingStrategy {
    /// Fail on invalid UTF-8
    #[default]
    Strict,
    /// Replace invalid bytes with U+FFFD and record a warning
    Lossy,
}

/// Configuration for file reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReadConfig {
    /// Maximum file size to read (bytes), unbounded when `None`
    pub max_file_size: Option<u64>,

    /// How to handle non-UTF-8 content
    pub encoding_strategy: EncodingStrategy,
}

impl Default for FileReadConfig {
    fn default() -> Self {
        Self {
            max_file_size: None,
            encoding_strategy: EncodingStrategy::Strict,
        }
    }
}

/// Text read from a file, with any warnings raised along the way
#[derive(Debug, Clone)]
pub struct FileText {
    pub content: String,
    pub warnings: Vec<FileWarning>,
    /// Size, mtime and hash of the bytes actually read
    pub meta: Meta,
}

/// Warning codes for file operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningCode {
    /// Lossy encoding conversion used
    LossyConversion,
    /// File appears to be binary
    BinaryFile,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::LossyConversion => "LOSSY_CONVERSION",
            WarningCode::BinaryFile => "BINARY_FILE",
        }
    }
}

/// A structured warning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileWarning {
    pub code: WarningCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl FileWarning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Convert to an error entry for embedding in a ResultItem
    pub fn to_filesum_error(&self) -> FilesumError {
        FilesumError::new(self.code.as_str(), &self.message)
    }

    /// Attach this warning to a result item
    pub fn attach_to(&self, item: ResultItem) -> ResultItem {
        item.with_error(self.to_filesum_error())
    }
}

/// Read a file as text with the given configuration.
///
/// `display` names the file in error messages and warnings.
pub fn read_text(path: &Path, display: &str, config: &FileReadConfig) -> Result<FileText, LoadError> {
    let file = fs::File::open(path).map_err(|e| LoadError::from_io(display, &e))?;
    let metadata = file.metadata().map_err(|e| LoadError::from_io(display, &e))?;

    if metadata.is_dir() {
        return Err(LoadError::IoFailure(format!(
            "'{}' is a directory, not a file",
            display
        )));
    }

    let file_size = metadata.len();
    if let Some(limit) = config.max_file_size {
        if file_size > limit {
            return Err(LoadError::IoFailure(format!(
                "File '{}' exceeds size limit ({} > {} bytes)",
                display, file_size, limit
            )));
        }
    }

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(file_size as usize);
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| LoadError::from_io(display, &e))?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    let meta = file_meta(&metadata, &bytes);
    let (content, warnings) = decode(bytes, display, config.encoding_strategy)?;
    Ok(FileText {
        content,
        warnings,
        meta,
    })
}

/// Convert raw bytes into text according to the encoding strategy.
///
/// NUL bytes alone never fail a read: valid UTF-8 is returned unchanged with a
/// `BinaryFile` warning. They only shape the error when decoding also fails.
fn decode(
    bytes: Vec<u8>,
    display: &str,
    strategy: EncodingStrategy,
) -> Result<(String, Vec<FileWarning>), LoadError> {
    let mut warnings = Vec::new();

    let check_len = std::cmp::min(BINARY_SNIFF_LEN, bytes.len());
    let looks_binary = bytes[..check_len].contains(&0);
    let binary_warning = || {
        FileWarning::new(
            WarningCode::BinaryFile,
            "File appears to be binary (contains null bytes)",
        )
        .with_path(display)
    };

    match String::from_utf8(bytes) {
        Ok(content) => {
            if looks_binary {
                debug!("{} contains null bytes but is valid UTF-8", display);
                warnings.push(binary_warning());
            }
            Ok((content, warnings))
        }
        Err(e) => match strategy {
            EncodingStrategy::Strict if looks_binary => Err(LoadError::IoFailure(format!(
                "File '{}' appears to be binary (contains null bytes)",
                display
            ))),
            EncodingStrategy::Strict => Err(LoadError::IoFailure(format!(
                "File '{}' is not valid UTF-8: {}",
                display,
                e.utf8_error()
            ))),
            EncodingStrategy::Lossy => {
                if looks_binary {
                    warn!("{} appears to be binary; reading it anyway", display);
                    warnings.push(binary_warning());
                }
                warn!("lossy UTF-8 conversion applied to {}", display);
                let content = String::from_utf8_lossy(e.as_bytes()).into_owned();
                warnings.push(
                    FileWarning::new(
                        WarningCode::LossyConversion,
                        "Lossy UTF-8 conversion applied (some characters replaced)",
                    )
                    .with_path(display),
                );
                Ok((content, warnings))
            }
        },
    }
}
