//! Shared helpers for CLI commands
//!
//! Logging setup, progress indicators, the fetch-to-CSV step, and the
//! conversion step with its batch summary reporting.

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::constants::DISPLAY_TIME_FORMAT;
use crate::converter::report::ConversionReport;
use crate::converter::EventConverter;
use crate::error::Result;
use crate::fetch::flatten::write_events_csv;
use crate::fetch::EventsClient;
use crate::writer::GeoJsonWriter;
use chrono::{DateTime, Local};
use colored::*;
use indicatif::ProgressBar;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Set up structured logging on stderr at the given level.
///
/// Safe to call more than once; later calls are no-ops.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("drivebc_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();

    debug!("Logging initialized at level: {}", log_level);
}

/// Spinner for steps without a known length
pub fn create_spinner(message: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Download events and write the flattened CSV.
///
/// An existing CSV is kept unless `force` is set; the caller learns whether
/// a download happened from the returned record count.
pub async fn fetch_to_csv(
    config: &Config,
    force: bool,
    show_progress: bool,
) -> Result<Option<usize>> {
    let csv_path = &config.processing.csv_path;

    if csv_path.exists() && !force {
        let modified = std::fs::metadata(csv_path)?.modified()?;
        let stamp = DateTime::<Local>::from(modified).format(DISPLAY_TIME_FORMAT);
        info!(
            "Events CSV already exists, keeping it (last modified {})",
            stamp
        );
        println!(
            "{} {} (last modified {}) - pass --force to refresh",
            "Keeping".bright_yellow(),
            csv_path.display(),
            stamp
        );
        return Ok(None);
    }

    let spinner = if show_progress {
        Some(create_spinner("Querying DriveBC events API..."))
    } else {
        None
    };

    let client = EventsClient::new(&config.api.base_url, config.api.timeout_secs)?;
    let fetched = client.fetch_events(config.api.record_limit).await;

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }

    let events = fetched?;
    let count = write_events_csv(&events, csv_path)?;

    println!(
        "{} {} records retrieved at {}",
        "Fetched".bright_green(),
        count.to_string().bright_white().bold(),
        Local::now().format(DISPLAY_TIME_FORMAT)
    );
    Ok(Some(count))
}

/// Convert the events CSV, write the GeoJSON layers, and print the batch
/// summary in the requested format.
pub fn convert_and_report(
    config: &Config,
    show_progress: bool,
    format: &OutputFormat,
) -> Result<()> {
    let start_time = Instant::now();
    let csv_path = &config.processing.csv_path;

    let spinner = if show_progress {
        Some(create_spinner(format!("Converting {}...", csv_path.display())))
    } else {
        None
    };

    let converter = EventConverter::new(config.processing.unknown_geometry);
    let converted = converter.convert_file(csv_path);

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }

    let result = converted?;
    let writer = GeoJsonWriter::new(&config.processing.output_dir);
    let (points_path, lines_path) = writer.write_collections(&result.collections)?;

    match format {
        OutputFormat::Human => print_human_summary(
            &result.report,
            &points_path,
            &lines_path,
            start_time.elapsed(),
        ),
        OutputFormat::Json => print_json_summary(
            &result.report,
            &points_path,
            &lines_path,
            start_time.elapsed(),
        )?,
    }

    Ok(())
}

fn print_human_summary(
    report: &ConversionReport,
    points_path: &Path,
    lines_path: &Path,
    elapsed: Duration,
) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        elapsed.as_millis().to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Rows read:".bright_cyan(),
        report.total_rows.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Points added:".bright_cyan(),
        report.points_added.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Lines added:".bright_cyan(),
        report.lines_added.to_string().bright_white().bold()
    );

    if !report.is_clean() {
        println!(
            "  {} {}",
            "Rows skipped:".bright_red(),
            report.rows_skipped().to_string().bright_red().bold()
        );
        for skip in &report.skipped {
            println!("    row {}: {}", skip.row_index, skip.reason);
        }
    }

    println!("\n{}", "Layers:".bright_cyan());
    println!("  {}", points_path.display());
    println!("  {}", lines_path.display());
    println!();
}

fn print_json_summary(
    report: &ConversionReport,
    points_path: &Path,
    lines_path: &Path,
    elapsed: Duration,
) -> Result<()> {
    let summary = serde_json::json!({
        "total_rows": report.total_rows,
        "points_added": report.points_added,
        "lines_added": report.lines_added,
        "rows_skipped": report.rows_skipped(),
        "skipped": report.skipped,
        "success_rate": report.success_rate(),
        "elapsed_ms": elapsed.as_millis() as u64,
        "layers": {
            "points": points_path.display().to_string(),
            "lines": lines_path.display().to_string(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
