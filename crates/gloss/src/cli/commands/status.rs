//! Implementation of `gloss status`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use gloss_config::{ConfigWarning, discover_config_files, format_path_for_display};
use gloss_model::{Category, Term};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, the seed source, glossary stats, and
/// validation warnings.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    let cwd = ctx.cwd.clone();

    let config_files = discover_config_files(&cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("gloss init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        let display_path = format_path_for_display(path, Some(&cwd));
        println!("   {display_path}");
    }
    println!();

    println!("{}", subheader("Seed data:"));
    match &ctx.config.data.seed {
        Some(path) => {
            let display_path = format_path_for_display(path, ctx.config.config_root.as_deref());
            if path.is_file() {
                println!("   {display_path}");
            } else {
                println!("   {display_path} {}", warning("[missing]"));
            }
        }
        None => println!("   {}", dim("(built-in collection)")),
    }
    println!();

    let warnings = ctx.config.validate();

    // Stats need the seed loaded; skip them when the seed itself is the problem.
    let seed_missing = warnings
        .iter()
        .any(|w| matches!(w, ConfigWarning::SeedFileMissing { .. }));
    if !seed_missing {
        let store = match ctx.store() {
            Ok(store) => store,
            Err(code) => return code,
        };
        let terms = store.all();
        let categories = store.categories();

        println!("{}", subheader("Glossary:"));
        print_category_table(&terms, &categories);
        let total_searches: u64 = terms.iter().map(|t| t.search_count).sum();
        let count = terms.len() as u64;
        let average = if count == 0 {
            0
        } else {
            (total_searches + count / 2) / count
        };
        println!(
            "{}",
            dim(&format!(
                "{count} terms, {total_searches} total searches, {average} avg per term"
            ))
        );
        println!();
    }
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints a per-category breakdown of term counts and search totals.
fn print_category_table(terms: &[Term], categories: &[Category]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Category", "Terms", "Searches"]);
    for category in categories {
        let in_category: Vec<&Term> = terms
            .iter()
            .filter(|t| t.category.id == category.id)
            .collect();
        let searches: u64 = in_category.iter().map(|t| t.search_count).sum();
        table.add_row(vec![
            Cell::new(&category.name),
            Cell::new(in_category.len().to_string()),
            Cell::new(searches.to_string()),
        ]);
    }
    println!("{table}");
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::SeedFileMissing { .. } => {
                println!(
                    "{}",
                    dim("Hint: fix the seed path in [data] or remove it to use built-in data")
                );
            }
            ConfigWarning::UnknownSortMode { .. } => {
                println!(
                    "{}",
                    dim("Hint: default_sort accepts relevance, alphabetical or popularity")
                );
            }
            _ => {}
        }
    }
}
