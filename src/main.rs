//! transit-route - shortest-path route planner
//!
//! Finds the quickest route between two stations of a small transit
//! network, either the built-in reference network or one read from a
//! TOML network file.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use transit_core::error::{ExitCode as RouteExitCode, RouteError};
use transit_core::format::OutputFormat;
use transit_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            err.exit()
        }
        // The parsed `--format` is unavailable here, so argv decides
        // whether the usage error is reported as JSON.
        Err(err) if requested_format() == OutputFormat::Json => {
            let usage = RouteError::UsageError(err.to_string());
            return report(&usage, OutputFormat::Json, false);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Print `err` to stderr and map it to the process exit code.
///
/// The JSON envelope is machine output and is written even with `--quiet`;
/// `--quiet` only silences the human-readable message.
fn report(err: &RouteError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
    ExitCode::from(err.exit_code() as u8)
}

/// The last `--format` value on the command line, for use when clap
/// rejected the arguments before `Cli` could be built
fn requested_format() -> OutputFormat {
    let mut format = OutputFormat::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(inline) => inline.strip_prefix('=').map(str::to_string),
            None => None,
        };
        if let Some(parsed) = value.and_then(|v| v.parse::<OutputFormat>().ok()) {
            format = parsed;
        }
    }
    format
}
