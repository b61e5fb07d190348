//! Command-line argument definitions for the DriveBC processor
//!
//! Defines the CLI surface using the clap derive API. Each subcommand owns
//! its arguments and a `validate()` pass for the constraints clap cannot
//! express.

use crate::constants::MAX_RECORD_LIMIT;
use crate::error::{DriveBcError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the DriveBC road-event processor
///
/// Fetches road events from the DriveBC Open511 API, flattens them into a
/// CSV batch, and converts that batch into GeoJSON point and line layers
/// for map production.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "drivebc-processor",
    version,
    about = "Convert DriveBC road events into GeoJSON map layers",
    long_about = "Fetches road-event data from the public DriveBC Open511 API, flattens it \
                  into a tabular CSV batch, and converts the batch into typed point and line \
                  feature layers (GeoJSON) ready for map production."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Download road events from the API and write the flattened CSV
    Fetch(FetchArgs),
    /// Convert the events CSV into GeoJSON point and line layers
    Convert(ConvertArgs),
    /// Run the full pipeline: fetch, then convert
    Run(RunArgs),
}

/// Arguments for the fetch command
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Number of records to request from the events endpoint
    ///
    /// The API serves at most 500 records per request.
    #[arg(short = 'l', long = "limit", value_name = "COUNT")]
    pub limit: Option<usize>,

    /// Output path for the flattened events CSV
    ///
    /// Defaults to ./events.csv unless overridden here or in the config file.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv_path: Option<PathBuf>,

    /// Re-download even if the CSV already exists
    ///
    /// Without this flag an existing CSV is kept and its age is reported.
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input path of the flattened events CSV
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output directory for the GeoJSON layers
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Abort on the first row with an unsupported geography type
    ///
    /// By default such rows are skipped and listed in the batch summary.
    #[arg(long = "strict-geometry")]
    pub strict_geometry: bool,

    /// Output format for the batch summary
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Path to configuration file (YAML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the run command (fetch + convert)
#[derive(Debug, Clone, Parser)]
pub struct RunArgs {
    /// Number of records to request from the events endpoint
    #[arg(short = 'l', long = "limit", value_name = "COUNT")]
    pub limit: Option<usize>,

    /// Path of the flattened events CSV (fetch output, convert input)
    #[arg(long = "csv", value_name = "PATH")]
    pub csv_path: Option<PathBuf>,

    /// Output directory for the GeoJSON layers
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Re-download even if the CSV already exists
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Abort on the first row with an unsupported geography type
    #[arg(long = "strict-geometry")]
    pub strict_geometry: bool,

    /// Output format for the batch summary
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Path to configuration file (YAML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options for the batch summary
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Map verbosity flags to a log level the way all commands share
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn validate_limit(limit: Option<usize>) -> Result<()> {
    if let Some(limit) = limit {
        if limit == 0 {
            return Err(DriveBcError::configuration(
                "Record limit must be greater than 0",
            ));
        }
        if limit > MAX_RECORD_LIMIT {
            return Err(DriveBcError::configuration(format!(
                "Record limit cannot exceed {} (API per-request cap)",
                MAX_RECORD_LIMIT
            )));
        }
    }
    Ok(())
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl FetchArgs {
    pub fn validate(&self) -> Result<()> {
        validate_limit(self.limit)
    }

    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ConvertArgs {
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(DriveBcError::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }
        }
        Ok(())
    }

    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl RunArgs {
    pub fn validate(&self) -> Result<()> {
        validate_limit(self.limit)
    }

    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_validation() {
        assert!(validate_limit(None).is_ok());
        assert!(validate_limit(Some(1)).is_ok());
        assert!(validate_limit(Some(MAX_RECORD_LIMIT)).is_ok());
        assert!(validate_limit(Some(0)).is_err());
        assert!(validate_limit(Some(MAX_RECORD_LIMIT + 1)).is_err());
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(1, false), "info");
        assert_eq!(log_level(2, false), "debug");
        assert_eq!(log_level(5, false), "trace");
        assert_eq!(log_level(3, true), "error");
    }

    #[test]
    fn test_parse_convert_command() {
        let args = Args::parse_from([
            "drivebc-processor",
            "convert",
            "--input",
            "events.csv",
            "--strict-geometry",
            "--output-format",
            "json",
        ]);

        match args.get_command() {
            Commands::Convert(convert) => {
                assert_eq!(convert.input, Some(PathBuf::from("events.csv")));
                assert!(convert.strict_geometry);
                assert_eq!(convert.output_format, OutputFormat::Json);
            }
            other => panic!("Expected convert command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_fetch_with_limit() {
        let args = Args::parse_from(["drivebc-processor", "fetch", "-l", "250", "--force"]);
        match args.get_command() {
            Commands::Fetch(fetch) => {
                assert_eq!(fetch.limit, Some(250));
                assert!(fetch.force);
                assert!(fetch.validate().is_ok());
            }
            other => panic!("Expected fetch command, got {:?}", other),
        }
    }
}
