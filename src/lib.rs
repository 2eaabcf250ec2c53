//! guruhadir library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod storage;
pub mod sync;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use logging::{Verbosity, init_logging};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } | Commands::Logout => commands::login::handle(cli, cfg),
        Commands::Checkin(_) | Commands::Checkout(_) => commands::attend::handle(cli, cfg),
        Commands::Sppd { .. } => commands::sppd::handle(cli, cfg),
        Commands::Leave { .. } => commands::leave::handle(cli, cfg),
        Commands::History { .. } => commands::history::handle(&cli.command, cfg),
        Commands::Status => commands::status::handle(cfg),
        Commands::Recap => commands::recap::handle(cli, cfg),
        Commands::Endpoint { .. } => commands::endpoint::handle(cli, cfg),
        Commands::Profile => commands::profile::handle(cfg),
        Commands::Reset { .. } => commands::reset::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and handed down
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet), &cfg.log_level);
    tracing::debug!(database = %cfg.database, "configuration loaded");

    dispatch(&cli, &cfg)
}
