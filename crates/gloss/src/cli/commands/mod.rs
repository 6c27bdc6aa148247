//! Command implementations and dispatch.

pub mod add;
pub mod config;
pub mod get;
pub mod init;
pub mod ls;
pub mod popular;
pub mod rm;
pub mod search;
mod shared;
pub mod status;
pub mod suggest;
pub mod update;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Suggest(cmd) => suggest::run(ctx, &cmd),
        Commands::Popular(cmd) => popular::run(ctx, &cmd),
        Commands::Get(cmd) => get::run(ctx, &cmd),
        Commands::Add(cmd) => add::run(ctx, &cmd),
        Commands::Update(cmd) => update::run(ctx, &cmd),
        Commands::Rm(cmd) => rm::run(ctx, &cmd),
        Commands::Ls(cmd) => ls::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
        Commands::Config => config::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
    }
}
