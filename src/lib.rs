//! rTimeclock library root.
//! Exposes the CLI parser, the high-level run() function and the clock core
//! (sessions, weekly totals, stores) for embedding and tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::context::RunContext;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &RunContext) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => cli::commands::init::handle(ctx),
        Commands::Config { .. } => cli::commands::config::handle(cmd, ctx),
        Commands::Db { .. } => cli::commands::db::handle(cmd, ctx),
        Commands::Log { .. } => cli::commands::log::handle(cmd, ctx),
        Commands::In | Commands::Out => cli::commands::clock::handle(cmd, ctx),
        Commands::Status => cli::commands::status::handle(ctx),
        Commands::Week { .. } => cli::commands::week::handle(cmd, ctx),
        Commands::List { .. } => cli::commands::list::handle(cmd, ctx),
        Commands::Edit { .. } => cli::commands::edit::handle(cmd, ctx),
        Commands::Del { .. } => cli::commands::del::handle(cmd, ctx),
        Commands::Employee { .. } => cli::commands::employee::handle(cmd, ctx),
        Commands::Export { .. } => cli::commands::export::handle(cmd, ctx),
        Commands::Backup { .. } => cli::commands::backup::handle(cmd, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load()?;
    let ctx = RunContext::from_cli(&cli, cfg)?;
    dispatch(&cli, &ctx)
}
