//! CLI argument parsing for transit-route
//!
//! Global flags: --network, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use transit_core::format::OutputFormat;

/// transit-route - find the quickest route through a transit network
#[derive(Parser, Debug)]
#[command(name = "transit-route")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML network file (defaults to the built-in reference network)
    #[arg(long, global = true, env = "TRANSIT_NETWORK")]
    pub network: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress error messages on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. info, transit_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the quickest route between two stations
    Route {
        /// Start station
        from: String,

        /// Destination station
        to: String,
    },

    /// List stations and their connections
    Stations,
}

/// Parse output format from string
fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
