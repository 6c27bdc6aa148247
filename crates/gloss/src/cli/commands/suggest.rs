//! Implementation of `gloss suggest`.

use std::process::ExitCode;

use crate::cli::{args::SuggestCommand, context::CommandContext, output::output_suggestions};

/// Prints autocomplete suggestions for a prefix.
pub fn run(ctx: &mut CommandContext, cmd: &SuggestCommand) -> ExitCode {
    let limit = cmd.limit.unwrap_or(ctx.config.settings.suggest_limit);
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let suggestions = store.suggest(&cmd.prefix, limit);
    output_suggestions(&cmd.prefix, &suggestions, cmd.json)
}
