//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Matcache - Memoizing Matrix Inverse Cache
///
/// Inverts square matrices through a single-slot cache: the first
/// solve computes, repeats are served from the stored inverse.
#[derive(Parser, Debug)]
#[command(name = "matcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MATCACHE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invert a matrix read from a JSON file
    Invert(InvertArgs),

    /// Check that a candidate matrix inverts another
    Check(CheckArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the invert command
#[derive(Parser, Debug)]
pub struct InvertArgs {
    /// Path to a JSON matrix file (array of equal-length rows)
    pub matrix: PathBuf,

    /// Validation tolerance override
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Re-multiply the result against the input and report the residual
    #[arg(long)]
    pub verify: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the matrix file
    pub matrix: PathBuf,

    /// Path to the candidate inverse file
    pub candidate: PathBuf,

    /// Validation tolerance override
    #[arg(short, long)]
    pub tolerance: Option<f64>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config action to perform
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
