//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, raw

use crate::core::model::{Kind, ResultItem, ResultSet};
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
            OutputFormat::Raw => self.render_raw(result_set),
        }
    }

    /// Render to a writer.
    ///
    /// Structured formats get a trailing newline; raw output is written as-is
    /// so viewed content stays byte-for-byte identical.
    pub fn render_to<W: Write>(&self, result_set: &ResultSet, mut writer: W) -> std::io::Result<()> {
        let output = self.render(result_set);
        writer.write_all(output.as_bytes())?;
        if self.config.format != OutputFormat::Raw && !output.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let errors: Vec<_> = result_set
            .items
            .iter()
            .filter(|item| item.kind == Kind::Error)
            .collect();

        if !errors.is_empty() {
            output.push_str("## Errors\n\n");
            for item in errors {
                for error in &item.errors {
                    output.push_str(&format!("- **{}**: {}\n", error.code, error.message));
                }
            }
            output.push('\n');
        }

        for item in &result_set.items {
            match item.kind {
                Kind::Sum => self.render_sum_md(&mut output, item),
                Kind::Content => self.render_content_md(&mut output, item),
                Kind::Error => {}
            }
        }

        output
    }

    fn render_sum_md(&self, output: &mut String, item: &ResultItem) {
        output.push_str("## Calculation Results\n\n");

        let Some(result) = &item.data else {
            if let Some(excerpt) = &item.excerpt {
                output.push_str(excerpt);
                output.push_str("\n\n");
            }
            return;
        };

        let path = item.path.as_deref().unwrap_or("");
        output.push_str(&format!("### Total\n\n{}\n\n", result.total));
        output.push_str(&format!(
            "### Numbers found in '{}'\n\n{}\n\n",
            path, result.display_list
        ));
        output.push_str(&format!("### Addition\n\n{}\n\n", result.display_sum_expr));
        output.push_str(&format!("### Sum\n\n{}\n\n", result.total));
        self.render_warnings_md(output, item);
    }

    fn render_content_md(&self, output: &mut String, item: &ResultItem) {
        if let Some(path) = &item.path {
            output.push_str(&format!("## `{}`", path));
            if let Some(size) = item.meta.size {
                output.push_str(&format!(" ({} bytes)", size));
            }
            output.push('\n');
        }

        if let Some(excerpt) = &item.excerpt {
            output.push_str("\n```\n");
            output.push_str(excerpt);
            if !excerpt.ends_with('\n') {
                output.push('\n');
            }
            output.push_str("```\n");
        }

        self.render_warnings_md(output, item);
        output.push('\n');
    }

    fn render_warnings_md(&self, output: &mut String, item: &ResultItem) {
        for warning in &item.errors {
            output.push_str(&format!("\n> ⚠️ {}: {}\n", warning.code, warning.message));
        }
    }

    /// Render as raw output: sum expressions, file content, or error messages
    fn render_raw(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| match item.kind {
                Kind::Error => item.errors.first().map(|e| e.message.clone()),
                _ => item.excerpt.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n---\n")
    }
}
