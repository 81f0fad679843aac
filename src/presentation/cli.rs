// Command line interface
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a config file (defaults to config/stromgedacht.* when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the SVG to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Current grid state as a colored panel
    Now {
        /// Postal code, passed to the API verbatim
        zip: String,
    },

    /// Grid states from 96h ago to 48h ahead as a bar strip
    Strip {
        /// Postal code, passed to the API verbatim
        zip: String,
    },

    /// Load, renewable energy, residual load and super-green threshold forecast
    Series {
        /// Postal code, passed to the API verbatim
        zip: String,
    },
}
