//! Implementation of `gloss add`.

use std::process::ExitCode;

use gloss_model::{CategoryId, TermDraft};

use crate::cli::{args::AddCommand, context::CommandContext, output::output_term};

/// Adds a new term to the glossary.
pub fn run(ctx: &mut CommandContext, cmd: &AddCommand) -> ExitCode {
    let draft = TermDraft {
        word: cmd.word.clone(),
        definition: cmd.definition.clone(),
        phonetic: cmd.phonetic.clone().unwrap_or_default(),
        category: CategoryId::new(cmd.category.clone()),
        example: cmd.example.clone().unwrap_or_default(),
        context: cmd.context.clone().unwrap_or_default(),
        audio_url: cmd.audio_url.clone(),
    };

    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let term = match store.add(draft) {
        Ok(term) => term,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if cmd.json {
        return output_term(&term, true);
    }
    println!("Added term {}", term.id);
    println!();
    output_term(&term, false)
}
