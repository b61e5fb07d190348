//! Run command implementation
//!
//! The full pipeline: fetch the events CSV (honoring the freshness check),
//! then convert it into GeoJSON layers.

use super::shared::{convert_and_report, fetch_to_csv, setup_logging};
use crate::cli::args::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::models::UnknownGeometryPolicy;
use tracing::{debug, info};

pub async fn run_pipeline(args: RunArgs) -> Result<()> {
    setup_logging(args.get_log_level());

    info!("Starting full pipeline");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let mut config = Config::load(args.config_file.as_deref())?;
    if let Some(limit) = args.limit {
        config.api.record_limit = limit;
    }
    if let Some(csv_path) = &args.csv_path {
        config.processing.csv_path = csv_path.clone();
    }
    if let Some(output) = &args.output {
        config.processing.output_dir = output.clone();
    }
    if args.strict_geometry {
        config.processing.unknown_geometry = UnknownGeometryPolicy::Strict;
    }
    config.validate()?;

    if let Some(count) = fetch_to_csv(&config, args.force, args.show_progress()).await? {
        info!("Fetched {} records", count);
    }

    convert_and_report(&config, args.show_progress(), &args.output_format)
}
