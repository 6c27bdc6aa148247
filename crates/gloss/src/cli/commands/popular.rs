//! Implementation of `gloss popular`.

use std::process::ExitCode;

use crate::cli::{args::PopularCommand, context::CommandContext, output::output_popular};

/// Prints the most-searched terms.
pub fn run(ctx: &mut CommandContext, cmd: &PopularCommand) -> ExitCode {
    let limit = cmd.limit.unwrap_or(ctx.config.settings.popular_limit);
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let terms = store.popular(limit);
    output_popular(&terms, &cmd.output)
}
