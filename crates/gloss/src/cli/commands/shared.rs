//! Helpers shared between command implementations.

use std::process::ExitCode;

use gloss_model::TermId;

/// Parses a term ID from a command-line argument.
///
/// Prints an error message and returns `ExitCode::FAILURE` if the argument
/// is not a valid ID.
pub fn parse_term_id(raw: &str) -> Result<TermId, ExitCode> {
    raw.parse().map_err(|_| {
        eprintln!("error: invalid term ID: {raw}");
        eprintln!("Expected a positive integer, e.g. 'gloss get 3'");
        ExitCode::FAILURE
    })
}
