//! CLI Argument Parsing
//!
//! `rea` has a single action, so there are no subcommands. Running it with
//! no arguments assembles the project in the current directory.

use std::path::PathBuf;

use clap::Parser;

/// Rebuild the engine and game, then lay out the engine build directory
#[derive(Parser, Debug)]
#[command(name = "rea")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root containing the engine and game projects
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: <root>/rea.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v lists every copied file)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Reuse existing build outputs instead of running the build tool
    #[arg(long)]
    pub skip_build: bool,
}
