use crate::types::config::{DEFAULT_MAX_SHELVES, DEFAULT_SHELF_CAPACITY};
use crate::types::MachineConfig;
use clap::Parser;
use std::path::PathBuf;

/// Replay a vending machine script
#[derive(Parser, Debug)]
#[command(name = "vending-machine")]
#[command(about = "Replay a vending machine script and print what the machine shows and dispenses", long_about = None)]
pub struct CliArgs {
    /// Script CSV file; the built-in demonstration runs when omitted
    #[arg(value_name = "INPUT", help = "Path to a CSV script (action,slot,name,price,quantity,amount)")]
    pub input_file: Option<PathBuf>,

    /// Maximum number of occupied shelves
    #[arg(
        long = "max-shelves",
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_SHELVES,
        allow_negative_numbers = true,
        help = "Maximum number of shelves in the machine (must be positive)"
    )]
    pub max_shelves: i32,

    /// Capacity of a single shelf
    #[arg(
        long = "shelf-capacity",
        value_name = "UNITS",
        default_value_t = DEFAULT_SHELF_CAPACITY,
        allow_negative_numbers = true,
        help = "Maximum number of units on one shelf (must be positive)"
    )]
    pub shelf_capacity: i32,

    /// Print the final inventory as CSV after the machine output
    #[arg(long = "report", help = "Append the final inventory as CSV")]
    pub report: bool,
}

impl CliArgs {
    /// Create a MachineConfig from CLI arguments
    ///
    /// The values are not validated here; building the machine reports
    /// non-positive dimensions as `InvalidConstruction`.
    pub fn to_machine_config(&self) -> MachineConfig {
        MachineConfig::new(self.max_shelves, self.shelf_capacity)
    }
}
