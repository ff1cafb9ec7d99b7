//! View command - shows a file's raw content

use anyhow::Result;
use log::debug;

use crate::commands::RunContext;
use crate::core::loader::load_content_named;
use crate::core::model::{ResultItem, ResultSet};

/// Run the view command. Returns whether the file was loaded successfully.
pub fn run_view(ctx: &RunContext, raw_path: &str) -> Result<bool> {
    let Some(input) = ctx.prepare_input(raw_path)? else {
        return Ok(false);
    };

    match load_content_named(&input.path, &input.display, &ctx.read) {
        Ok(text) => {
            debug!("{}: {} bytes of text", input.display, text.content.len());
            let base = ResultItem::content(&input.display, text.content.as_str())
                .with_meta(text.meta.clone());
            let item = text
                .warnings
                .iter()
                .fold(base, |item, w| w.attach_to(item));
            ctx.emit(&ResultSet::from(item))?;
            Ok(true)
        }
        Err(err) => {
            ctx.report_failure(&input.display, err.code(), &err.to_string())?;
            Ok(false)
        }
    }
}
