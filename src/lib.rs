//! rVolunteer library root.
//! Exposes the CLI parser, the in-memory store, the high-level run()
//! function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::{Config, OutputFormat};
use errors::AppResult;
use std::path::Path;
use store::Store;

/// Central command dispatcher
pub fn dispatch(
    cmd: &Commands,
    cfg: &Config,
    config_path: &Path,
    store: &mut Store,
) -> AppResult<()> {
    match cmd {
        Commands::Users { action } => commands::users::handle(action, cfg, store),
        Commands::Events { action } => commands::events::handle(action, cfg, store),
        Commands::Duties { action } => commands::duties::handle(action, cfg, store),
        Commands::Shifts { action } => commands::shifts::handle(action, cfg, store),
        Commands::Volunteers { action } => commands::volunteers::handle(action, cfg, store),
        Commands::Assignments { action } => commands::assignments::handle(action, cfg, store),
        Commands::Stats => commands::stats::handle(cfg, store),
        Commands::Portal { email } => commands::portal::handle(email, cfg, store),
        Commands::Log => commands::log::handle(cfg, store),
        Commands::Export { .. } => commands::export::handle(cmd, cfg, store),
        Commands::Config { .. } => commands::config::handle(cmd, cfg, config_path),
        Commands::Shell => commands::shell::handle(cfg, config_path, store),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let config_path = Config::resolve_path(cli.config.as_deref());
    let mut cfg = Config::load(&config_path)?;

    // 3️⃣ command-line overrides
    if cli.json {
        cfg.output = OutputFormat::Json;
    }
    if cli.no_seed {
        cfg.seed_demo_data = false;
    }

    // 4️⃣ the store lives for this process only
    let mut store = if cfg.seed_demo_data {
        Store::new()
    } else {
        Store::empty()
    };

    dispatch(&cli.command, &cfg, &config_path, &mut store)
}
