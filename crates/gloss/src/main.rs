//! Command-line entry point for the `gloss` glossary manager.

use std::process::ExitCode;

use env_logger::Env;
use gloss::cli::{
    CommandContext,
    args::{self, Commands},
    commands,
};

fn main() -> ExitCode {
    let cli = args::parse_cli();

    // Default level depends on --debug; RUST_LOG still overrides.
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    let mut ctx = match command_context(&cli.command) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &mut ctx)
}

/// Builds the command context, skipping config parsing for `init`.
fn command_context(command: &Commands) -> Result<CommandContext, ExitCode> {
    match command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    }
}
