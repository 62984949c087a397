use std::path::PathBuf;

use clap::Parser;

/// Terminal stopwatch with lap splits
#[derive(Debug, Parser)]
#[command(name = "lapwatch", version, about)]
pub struct Args {
    /// Config file to use instead of ~/.config/lapwatch/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start timing immediately
    #[arg(long)]
    pub start: bool,

    /// Hide the lap statistics panel (toggle with 's')
    #[arg(long)]
    pub no_stats: bool,
}
