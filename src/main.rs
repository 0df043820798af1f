//! Vending machine CLI
//!
//! Replays a machine script and prints every display notice and dispense
//! command to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                   # built-in demonstration
//! cargo run -- script.csv
//! cargo run -- --max-shelves 10 --shelf-capacity 5 script.csv
//! cargo run -- --report script.csv > transcript.txt
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid machine dimensions, file not found, file not readable, etc.)

use std::io::Write;
use std::process;
use tracing::error;
use vending_machine::cli;
use vending_machine::io::write_inventory_csv;
use vending_machine::runner::ScriptRunner;
use vending_machine::VendingError;

fn run(args: &cli::CliArgs, output: &mut dyn Write) -> Result<(), VendingError> {
    let runner = ScriptRunner::new(args.to_machine_config());

    let shelves = match &args.input_file {
        Some(path) => runner.run_file(path, output)?,
        None => runner.run_demo(output)?,
    };

    if args.report {
        write_inventory_csv(&shelves, output)?;
    }

    Ok(())
}

fn main() {
    cli::setup_tracing();
    let args = cli::parse_args();

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    if let Err(e) = run(&args, &mut output) {
        error!(error = %e, "run failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
