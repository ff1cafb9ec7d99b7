//! Sum command - totals the integers in a file

use anyhow::Result;
use log::{debug, info};

use crate::commands::RunContext;
use crate::core::aggregate::{parse_and_sum_named, SumOptions};
use crate::core::model::{ResultItem, ResultSet};
use crate::core::tokenizer::DecimalPolicy;

/// Run the sum command. Returns whether the file was summed successfully.
pub fn run_sum(ctx: &RunContext, raw_path: &str, decimals: DecimalPolicy) -> Result<bool> {
    let Some(input) = ctx.prepare_input(raw_path)? else {
        return Ok(false);
    };

    let options = SumOptions {
        decimals,
        read: ctx.read.clone(),
    };
    debug!("summing {} with decimal policy {}", input.display, decimals);

    match parse_and_sum_named(&input.path, &input.display, &options) {
        Ok((result, warnings)) => {
            info!("{}: total {}", input.display, result.total);
            let item = warnings
                .iter()
                .fold(ResultItem::sum(&input.display, &result), |item, w| {
                    w.attach_to(item)
                });
            ctx.emit(&ResultSet::from(item))?;
            Ok(true)
        }
        Err(err) => {
            ctx.report_failure(&input.display, err.code(), &err.to_string())?;
            Ok(false)
        }
    }
}
