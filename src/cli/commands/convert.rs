//! Convert command implementation
//!
//! Turns the flattened events CSV into GeoJSON point and line layers and
//! prints the batch summary.

use super::shared::{convert_and_report, setup_logging};
use crate::cli::args::ConvertArgs;
use crate::config::Config;
use crate::error::Result;
use crate::models::UnknownGeometryPolicy;
use tracing::{debug, info};

pub async fn run_convert(args: ConvertArgs) -> Result<()> {
    setup_logging(args.get_log_level());

    info!("Starting conversion");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let mut config = Config::load(args.config_file.as_deref())?;
    if let Some(input) = &args.input {
        config.processing.csv_path = input.clone();
    }
    if let Some(output) = &args.output {
        config.processing.output_dir = output.clone();
    }
    if args.strict_geometry {
        config.processing.unknown_geometry = UnknownGeometryPolicy::Strict;
    }
    config.validate()?;

    convert_and_report(&config, args.show_progress(), &args.output_format)
}
