//! Command implementations for the DriveBC processor CLI
//!
//! Each subcommand lives in its own module; `shared` holds the logging,
//! progress, and summary helpers the commands have in common.

pub mod convert;
pub mod fetch;
pub mod run;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the selected subcommand.
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Fetch(fetch_args) => fetch::run_fetch(fetch_args).await,
        Commands::Convert(convert_args) => convert::run_convert(convert_args).await,
        Commands::Run(run_args) => run::run_pipeline(run_args).await,
    }
}
