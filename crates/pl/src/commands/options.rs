//! Options command implementation.
//!
//! Prints the values accepted by the `list` filters.

use portfolio_view::filter::FilterOptions;

use super::{CommandContext, Result};
use crate::output::{format_options_json, format_options_table};

/// Executes the options command.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let options = FilterOptions::from_context(&dataset.context());

    if ctx.json_output {
        println!("{}", format_options_json(&options)?);
    } else if !ctx.quiet {
        print!("{}", format_options_table(&options, ctx.use_colors));
    }

    Ok(())
}
