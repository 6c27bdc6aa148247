//! Implementation of `gloss search`.

use std::process::ExitCode;

use gloss_model::CategoryId;
use gloss_query::{SearchFilter, SortMode};

use crate::cli::{args::SearchCommand, context::CommandContext, output::output_search_results};

/// Runs a glossary search and prints the matching terms.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let query = cmd.queries.join(" ");
    let sort = cmd
        .sort
        .unwrap_or_else(|| default_sort(&ctx.config.settings.default_sort));
    let filter = SearchFilter {
        query: query.clone(),
        category: cmd.category.clone().map(CategoryId::new),
        sort,
    };

    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let results = store.search(&filter);
    output_search_results(&results, &query, &cmd.output)
}

/// Resolves the configured default sort mode.
///
/// Config validation reports unknown values as warnings, so an unparseable
/// setting falls back to relevance here rather than failing the command.
fn default_sort(value: &str) -> SortMode {
    value.parse().unwrap_or_default()
}
