//! CLI argument definitions

use crate::infrastructure::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daysplit")]
#[command(about = "Split a devotional study guide into one file per day", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Study guide to split (default: context/writings/lifegoalsstudyguide.md)
    #[arg(short, long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Directory receiving the per-day folders (default: days)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Extension for generated files (default: md)
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Config file (default: daysplit.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reject unrecognized lines outside a faith section instead of collecting them
    #[arg(long)]
    pub strict: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Config values given as flags
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source_path: self.source.clone(),
            output_root: self.output.clone(),
            extension: self.extension.clone(),
        }
    }
}
