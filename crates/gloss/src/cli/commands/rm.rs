//! Implementation of `gloss rm`.

use std::process::ExitCode;

use crate::cli::{args::RmCommand, context::CommandContext, output::dim};

use super::shared::parse_term_id;

/// Removes a term from the glossary.
///
/// Removing an ID that does not exist is not an error; the command reports
/// that nothing happened and exits successfully.
pub fn run(ctx: &mut CommandContext, cmd: &RmCommand) -> ExitCode {
    let id = match parse_term_id(&cmd.id) {
        Ok(id) => id,
        Err(code) => return code,
    };
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    if store.delete(id) {
        println!("Removed term {id}");
    } else {
        println!("{}", dim(&format!("No term with ID {id}, nothing removed.")));
    }
    ExitCode::SUCCESS
}
