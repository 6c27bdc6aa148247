//! Clap argument definitions for the `gloss` CLI.

use std::{env, process::exit};

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};
use gloss_query::{FilterError, SortMode};

/// Parse a result ordering from a string.
fn parse_sort(s: &str) -> Result<SortMode, FilterError> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "gloss")]
#[command(about = "Glossary manager - categorized term definitions with search and popularity tracking")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output one term per line without definitions
    #[arg(long)]
    pub list: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `gloss search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search query (joined with spaces when given as multiple arguments)
    pub queries: Vec<String>,

    /// Restrict matches to a category ID
    #[arg(short = 'c', long)]
    pub category: Option<String>,

    /// Result ordering: relevance, alphabetical or popularity [default: relevance]
    #[arg(short = 's', long, value_parser = parse_sort)]
    pub sort: Option<SortMode>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `gloss suggest`.
#[derive(Args, Debug, Clone)]
pub struct SuggestCommand {
    /// Word prefix to complete
    pub prefix: String,

    /// Maximum suggestions to return [default: 5]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `gloss popular`.
#[derive(Args, Debug, Clone)]
pub struct PopularCommand {
    /// Maximum terms to return [default: 5]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `gloss get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Term ID
    pub id: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `gloss add`.
#[derive(Args, Debug, Clone)]
pub struct AddCommand {
    /// The word or phrase to define
    pub word: String,

    /// Definition text
    pub definition: String,

    /// Category ID the term belongs to
    #[arg(short = 'c', long)]
    pub category: String,

    /// Phonetic transcription
    #[arg(long)]
    pub phonetic: Option<String>,

    /// Usage example sentence
    #[arg(long)]
    pub example: Option<String>,

    /// Context notes describing where the term applies
    #[arg(long)]
    pub context: Option<String>,

    /// Pronunciation audio URL
    #[arg(long)]
    pub audio_url: Option<String>,

    /// Output the created term in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `gloss update`.
#[derive(Args, Debug, Clone)]
pub struct UpdateCommand {
    /// Term ID
    pub id: String,

    /// New word or phrase
    #[arg(long)]
    pub word: Option<String>,

    /// New definition text
    #[arg(long)]
    pub definition: Option<String>,

    /// New category ID
    #[arg(short = 'c', long)]
    pub category: Option<String>,

    /// New phonetic transcription
    #[arg(long)]
    pub phonetic: Option<String>,

    /// New usage example sentence
    #[arg(long)]
    pub example: Option<String>,

    /// New context notes
    #[arg(long)]
    pub context: Option<String>,

    /// New pronunciation audio URL
    #[arg(long)]
    pub audio_url: Option<String>,

    /// Output the updated term in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `gloss rm`.
#[derive(Args, Debug, Clone)]
pub struct RmCommand {
    /// Term ID
    pub id: String,
}

/// Arguments for `gloss ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Show detailed information.
    #[arg(short = 'l', long)]
    pub long: bool,

    /// What to list.
    #[command(subcommand)]
    pub what: LsWhat,
}

/// What to list with `gloss ls`.
#[derive(Clone, Copy, Subcommand, Debug)]
pub enum LsWhat {
    /// List all terms
    Terms,
    /// List all categories
    Categories,
}

/// Arguments for `gloss init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.gloss.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `gloss` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search terms and output matching entries
    #[command(after_help = "\
MATCHING:
  The query is matched case-insensitively as a substring of each term's
  word, definition, and context notes. Multiple arguments are joined with
  spaces and matched as one phrase. An empty query matches every term.

EXAMPLES:
  gloss search javascript
  gloss search base de données
  gloss search -c 3 algorithme
  gloss search --sort popularity
  gloss search --json --sort alphabetical")]
    Search(SearchCommand),

    /// Suggest words completing a prefix
    Suggest(SuggestCommand),

    /// Show the most searched terms
    Popular(PopularCommand),

    /// Retrieve a term by ID and record the lookup
    Get(GetCommand),

    /// Add a new term to the glossary
    Add(AddCommand),

    /// Update fields of an existing term
    Update(UpdateCommand),

    /// Remove a term by ID
    Rm(RmCommand),

    /// List terms or categories
    Ls(LsCommand),

    /// Show configuration, seed source, and glossary statistics
    Status,

    /// Show effective configuration settings
    Config,

    /// Initialize gloss configuration in current directory
    Init(InitCommand),
}

/// Parses CLI arguments, printing hierarchical help for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_hierarchical_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints custom help with hierarchical subcommand display.
fn print_hierarchical_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: gloss <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }

        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");

        for subsub in sub.get_subcommands() {
            let subname = subsub.get_name();
            if subname == "help" {
                continue;
            }
            let subabout = subsub
                .get_about()
                .map(|s| s.to_string())
                .unwrap_or_default();
            println!("    {subname:8} {subabout}");
        }
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -h, --help  Print help");
}

#[cfg(test)]
mod tests {
    use gloss_config::{DEFAULT_POPULAR_LIMIT, DEFAULT_SORT, DEFAULT_SUGGEST_LIMIT};

    use super::*;

    /// Gets help text for a subcommand's argument.
    fn get_arg_help(cmd: &clap::Command, subcmd: &str, arg: &str) -> String {
        cmd.get_subcommands()
            .find(|c| c.get_name() == subcmd)
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
            .and_then(|a| a.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    /// Verifies that CLI help text contains the correct default values.
    ///
    /// This test catches drift between the DEFAULT_* constants in gloss-config
    /// and the help text strings in command definitions.
    #[test]
    fn cli_help_defaults_match_constants() {
        let cmd = Cli::command();

        let suggest_help = get_arg_help(&cmd, "suggest", "limit");
        assert!(
            suggest_help.contains(&format!("[default: {}]", DEFAULT_SUGGEST_LIMIT)),
            "suggest --limit help should contain default {}: {suggest_help}",
            DEFAULT_SUGGEST_LIMIT
        );

        let popular_help = get_arg_help(&cmd, "popular", "limit");
        assert!(
            popular_help.contains(&format!("[default: {}]", DEFAULT_POPULAR_LIMIT)),
            "popular --limit help should contain default {}: {popular_help}",
            DEFAULT_POPULAR_LIMIT
        );

        let sort_help = get_arg_help(&cmd, "search", "sort");
        assert!(
            sort_help.contains(&format!("[default: {}]", DEFAULT_SORT)),
            "search --sort help should contain default {}: {sort_help}",
            DEFAULT_SORT
        );
    }

    #[test]
    fn sort_parser_accepts_canonical_names() {
        assert_eq!(parse_sort("alphabetical"), Ok(SortMode::Alphabetical));
        assert_eq!(parse_sort(" Popularity "), Ok(SortMode::Popularity));
        assert!(parse_sort("recent").is_err());
    }
}
