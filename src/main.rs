use clap::Parser;
use drivebc_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the selected command
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            // Success - the command has already reported its summary
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("DriveBC Processor - Road Event Map Layer Generator");
    println!("==================================================");
    println!();
    println!("Fetch road events from the public DriveBC Open511 API and convert");
    println!("them into GeoJSON point and line layers for map production.");
    println!();
    println!("USAGE:");
    println!("    drivebc-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    fetch       Download road events and write the flattened CSV");
    println!("    convert     Convert the events CSV into GeoJSON layers");
    println!("    run         Full pipeline: fetch then convert (main command)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Fetch up to 500 events and build the layers:");
    println!("    drivebc-processor run");
    println!();
    println!("    # Fetch a smaller batch into a custom location:");
    println!("    drivebc-processor fetch --limit 100 --csv data/events.csv");
    println!();
    println!("    # Convert an existing CSV, failing on unsupported geometries:");
    println!("    drivebc-processor convert --input data/events.csv --strict-geometry");
    println!();
    println!("For detailed help on any command, use:");
    println!("    drivebc-processor <COMMAND> --help");
}
