//! Commands module - Each subcommand takes a path, calls into core, and renders
//! one immutable result snapshot
//!
//! Provides:
//! - sum: Sum the integers in a file
//! - view: Show a file's raw content

pub mod sum;
pub mod view;

use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::file_reader::FileReadConfig;
use crate::core::model::{FilesumError, ResultItem, ResultSet};
use crate::core::paths::{clean_input, normalize_path, resolve, NamePolicy};
use crate::core::render::{RenderConfig, Renderer};

/// Settings shared by every command
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    pub root: PathBuf,
    pub render: RenderConfig,
    pub read: FileReadConfig,
    pub names: NamePolicy,
    pub quiet: bool,
}

/// A user-supplied path after cleanup and resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Path as the user typed it (quotes removed), for messages
    pub display: String,
    /// Location actually read
    pub path: PathBuf,
}

impl RunContext {
    /// Clean up a raw path argument and apply the name policy.
    ///
    /// On a policy violation the failure is reported and `None` returned.
    pub fn prepare_input(&self, raw: &str) -> Result<Option<Input>> {
        let cleaned = clean_input(raw);
        let display = normalize_path(Path::new(cleaned));
        let path = resolve(&self.root, Path::new(cleaned));
        debug!("input {:?} resolved to {}", raw, path.display());

        if let Err(err) = self.names.check(&path) {
            self.report_failure(&display, err.code(), &err.to_string())?;
            return Ok(None);
        }

        Ok(Some(Input { display, path }))
    }

    /// Render a result set to stdout
    pub fn emit(&self, result_set: &ResultSet) -> Result<()> {
        let renderer = Renderer::with_config(self.render);
        renderer
            .render_to(result_set, io::stdout().lock())
            .context("Failed to write output")
    }

    /// Emit an error item and echo the message on stderr
    pub fn report_failure(&self, display: &str, code: &str, message: &str) -> Result<()> {
        if !self.quiet {
            eprintln!("{} {}", "error:".red().bold(), message);
        }
        let item = ResultItem::error(FilesumError::new(code, message)).with_path(display);
        self.emit(&ResultSet::from(item))
    }
}
