//! Implementation of `gloss update`.

use std::process::ExitCode;

use gloss_model::{CategoryId, TermPatch};

use crate::cli::{args::UpdateCommand, context::CommandContext, output::output_term};

use super::shared::parse_term_id;

/// Applies field updates to an existing term.
pub fn run(ctx: &mut CommandContext, cmd: &UpdateCommand) -> ExitCode {
    let id = match parse_term_id(&cmd.id) {
        Ok(id) => id,
        Err(code) => return code,
    };
    let patch = TermPatch {
        word: cmd.word.clone(),
        definition: cmd.definition.clone(),
        phonetic: cmd.phonetic.clone(),
        category: cmd.category.clone().map(CategoryId::new),
        example: cmd.example.clone(),
        context: cmd.context.clone(),
        audio_url: cmd.audio_url.clone(),
    };

    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let term = match store.update(id, &patch) {
        Ok(term) => term,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if cmd.json {
        return output_term(&term, true);
    }
    println!("Updated term {}", term.id);
    println!();
    output_term(&term, false)
}
