//! Raw content loader - reads a file verbatim for display

use std::path::Path;

use crate::core::error::LoadError;
use crate::core::file_reader::{read_text, FileReadConfig, FileText};

/// Read the full text of `path` with default settings
pub fn load_content(path: impl AsRef<Path>) -> Result<String, LoadError> {
    load_content_with(path, &FileReadConfig::default()).map(|text| text.content)
}

/// Read the full text of `path`, keeping any warnings raised while reading
pub fn load_content_with(
    path: impl AsRef<Path>,
    config: &FileReadConfig,
) -> Result<FileText, LoadError> {
    let path = path.as_ref();
    load_content_named(path, &path.display().to_string(), config)
}

/// Like [`load_content_with`], naming the file `display` in errors and warnings
pub fn load_content_named(
    path: &Path,
    display: &str,
    config: &FileReadConfig,
) -> Result<FileText, LoadError> {
    read_text(path, display, config)
}
