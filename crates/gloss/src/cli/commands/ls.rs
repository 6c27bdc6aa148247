//! Implementation of `gloss ls`.

use std::process::ExitCode;

use crate::cli::{
    args::{LsCommand, LsWhat},
    context::CommandContext,
    output::{dim, header, indent_content},
};

/// Lists glossary terms or categories.
pub fn run(ctx: &mut CommandContext, cmd: &LsCommand) -> ExitCode {
    match cmd.what {
        LsWhat::Terms => cmd_ls_terms(ctx, cmd.long),
        LsWhat::Categories => cmd_ls_categories(ctx, cmd.long),
    }
}

/// Lists every term, one line each, with definitions in long mode.
fn cmd_ls_terms(ctx: &mut CommandContext, long: bool) -> ExitCode {
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let terms = store.all();
    if terms.is_empty() {
        println!("{}", dim("No terms in the glossary."));
        return ExitCode::SUCCESS;
    }
    for term in &terms {
        println!(
            "{} {} {}",
            header(&term.word),
            dim(&format!("[{}]", term.id)),
            dim(&term.category.name)
        );
        if long {
            println!("{}", indent_content(&term.definition));
            println!(
                "{}",
                indent_content(&dim(&format!("{} searches", term.search_count)))
            );
            println!();
        }
    }
    ExitCode::SUCCESS
}

/// Lists the category set, with styling tokens in long mode.
fn cmd_ls_categories(ctx: &mut CommandContext, long: bool) -> ExitCode {
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let categories = store.categories();
    if categories.is_empty() {
        println!("{}", dim("No categories defined."));
        return ExitCode::SUCCESS;
    }
    for category in &categories {
        println!(
            "{} {}",
            header(&category.name),
            dim(&format!("[{}]", category.id))
        );
        if long {
            println!(
                "{}",
                indent_content(&dim(&format!("{} {}", category.icon, category.color)))
            );
            println!();
        }
    }
    ExitCode::SUCCESS
}
