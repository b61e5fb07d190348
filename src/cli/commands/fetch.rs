//! Fetch command implementation
//!
//! Queries the DriveBC events API and writes the flattened CSV batch.

use super::shared::{fetch_to_csv, setup_logging};
use crate::cli::args::FetchArgs;
use crate::config::Config;
use crate::error::Result;
use tracing::{debug, info};

pub async fn run_fetch(args: FetchArgs) -> Result<()> {
    setup_logging(args.get_log_level());

    info!("Starting fetch");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let mut config = Config::load(args.config_file.as_deref())?;
    if let Some(limit) = args.limit {
        config.api.record_limit = limit;
    }
    if let Some(csv_path) = &args.csv_path {
        config.processing.csv_path = csv_path.clone();
    }
    config.validate()?;

    fetch_to_csv(&config, args.force, args.show_progress()).await?;
    Ok(())
}
