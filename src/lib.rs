//! rPunchclock library root.
//! Exposes the ledger store, its blob storage, the CLI parser and the
//! high-level `run()` entry point.

pub mod blob;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg).await,
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg).await,
        Commands::In { .. } | Commands::Out { .. } => {
            cli::commands::punch::handle(&cli.command, cfg).await
        }
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg).await,
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg).await,
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the configuration once.
    let mut cfg = Config::load()?;

    // Command-line overrides win over the file.
    if let Some(store) = &cli.store {
        cfg.store_dir = store.clone();
    }
    if let Some(key) = &cli.key {
        cfg.snapshot_key = key.clone();
    }

    dispatch(&cli, &cfg).await
}
