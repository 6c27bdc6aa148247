//! Implementation of `gloss get`.

use std::process::ExitCode;

use crate::cli::{args::GetCommand, context::CommandContext, output::output_term};

use super::shared::parse_term_id;

/// Looks up a single term by ID and records the lookup.
pub fn run(ctx: &mut CommandContext, cmd: &GetCommand) -> ExitCode {
    let id = match parse_term_id(&cmd.id) {
        Ok(id) => id,
        Err(code) => return code,
    };
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let term = match store.fetch(id) {
        Ok(term) => term,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    output_term(&term, cmd.json)
}
