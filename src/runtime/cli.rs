use std::path::PathBuf;

use clap::Parser;

/// A small console music player with named collections.
#[derive(Debug, Parser)]
#[command(name = "tunedeck", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter such as `info` or `tunedeck=debug` (overrides `TUNEDECK_LOG`).
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Audio files or directories to load before the menu starts.
    pub paths: Vec<PathBuf>,
}
