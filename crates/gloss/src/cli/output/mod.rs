//! Rendering and JSON serialization for CLI output.

mod style;

use std::process::ExitCode;

use gloss_model::Term;
use serde::Serialize;

pub use style::{dim, header, indent_content, subheader, warning};

use crate::cli::args::OutputArgs;

/// JSON output for `gloss search`.
#[derive(Serialize)]
struct JsonSearchOutput {
    /// The original query string.
    query: String,
    /// Total matches returned.
    total_matches: usize,
    /// Matching terms in result order.
    results: Vec<Term>,
}

/// JSON output for term listings without a query.
#[derive(Serialize)]
struct JsonTermList {
    /// Number of terms returned.
    total: usize,
    /// Terms in result order.
    terms: Vec<Term>,
}

/// JSON output for `gloss suggest`.
#[derive(Serialize)]
struct JsonSuggestOutput {
    /// The prefix that was completed.
    prefix: String,
    /// Suggested words in glossary order.
    suggestions: Vec<String>,
}

/// Outputs search results in the selected format.
pub fn output_search_results(terms: &[Term], query: &str, output: &OutputArgs) -> ExitCode {
    if output.json {
        let json_output = JsonSearchOutput {
            query: query.to_string(),
            total_matches: terms.len(),
            results: terms.to_vec(),
        };
        return print_json(&json_output);
    }

    if terms.is_empty() {
        println!("{}", dim("No results found."));
        return ExitCode::SUCCESS;
    }

    if output.list {
        for term in terms {
            println!("{}", format_term_line(term));
        }
        return ExitCode::SUCCESS;
    }

    for term in terms {
        print!("{}", format_term(term));
        println!();
    }
    ExitCode::SUCCESS
}

/// Outputs a popularity ranking in the selected format.
pub fn output_popular(terms: &[Term], output: &OutputArgs) -> ExitCode {
    if output.json {
        let json_output = JsonTermList {
            total: terms.len(),
            terms: terms.to_vec(),
        };
        return print_json(&json_output);
    }

    if terms.is_empty() {
        println!("{}", dim("No results found."));
        return ExitCode::SUCCESS;
    }

    if output.list {
        for term in terms {
            println!("{}", format_term_line(term));
        }
        return ExitCode::SUCCESS;
    }

    for (rank, term) in terms.iter().enumerate() {
        println!(
            "{:>2}. {} {}",
            rank + 1,
            header(&term.word),
            dim(&format!("({} searches)", term.search_count))
        );
    }
    ExitCode::SUCCESS
}

/// Outputs a single term, as JSON or as a full text block.
pub fn output_term(term: &Term, json: bool) -> ExitCode {
    if json {
        return print_json(term);
    }
    print!("{}", format_term(term));
    ExitCode::SUCCESS
}

/// Outputs autocomplete suggestions, one word per line or as JSON.
pub fn output_suggestions(prefix: &str, suggestions: &[String], json: bool) -> ExitCode {
    if json {
        let json_output = JsonSuggestOutput {
            prefix: prefix.to_string(),
            suggestions: suggestions.to_vec(),
        };
        return print_json(&json_output);
    }
    for word in suggestions {
        println!("{word}");
    }
    ExitCode::SUCCESS
}

/// Serializes a value as pretty JSON to stdout.
fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Formats a term as a full display block.
fn format_term(term: &Term) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "─── {} ───\n",
        header(&format!("{}: {}", term.id, term.word))
    ));

    let mut meta = term.category.name.clone();
    if !term.phonetic.is_empty() {
        meta.push_str(&format!(" {}", term.phonetic));
    }
    meta.push_str(&format!(", {} searches", term.search_count));
    output.push_str(&format!("{}\n", dim(&meta)));

    output.push('\n');
    output.push_str(&term.definition);
    output.push('\n');

    let mut extras = String::new();
    if !term.example.is_empty() {
        extras.push_str(&format!("{} {}\n", dim("example:"), term.example));
    }
    if !term.context.is_empty() {
        extras.push_str(&format!("{} {}\n", dim("context:"), term.context));
    }
    if let Some(audio_url) = &term.audio_url {
        extras.push_str(&format!("{} {}\n", dim("audio:"), audio_url));
    }
    if !extras.is_empty() {
        output.push('\n');
        output.push_str(&extras);
    }

    output
}

/// Formats a term as a single listing line.
fn format_term_line(term: &Term) -> String {
    format!(
        "{} {} {}",
        header(&term.word),
        dim(&format!("[{}]", term.id)),
        dim(&term.category.name)
    )
}
