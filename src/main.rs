//! Matcache - Memoizing Matrix Inverse Cache
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use matcache::cli::{Cli, Commands};
use matcache::config::ConfigManager;
use matcache::error::MatcacheResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> MatcacheResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load()?;

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match (cli.verbose, config.general.verbose) {
        (0, false) => EnvFilter::new("matcache=warn"),
        (0, true) | (1, _) => EnvFilter::new("matcache=info"),
        _ => EnvFilter::new("matcache=debug"),
    };

    if config.general.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .init();
    }

    // Dispatch to command
    match cli.command {
        Commands::Invert(args) => matcache::cli::commands::invert(args, &config),
        Commands::Check(args) => matcache::cli::commands::check(args, &config),
        Commands::Config(args) => matcache::cli::commands::config(args, &config),
    }
}
