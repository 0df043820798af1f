//! I/O module
//!
//! Handles script input, machine output and inventory reports.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, report serialization)
//! - `script_reader` - Streaming CSV script reader with iterator interface
//! - `console` - Display and dispenser writing lines to a writer
//! - `transcript` - Display and dispenser recording events in memory

pub mod console;
pub mod csv_format;
pub mod script_reader;
pub mod transcript;

pub use console::Console;
pub use csv_format::{convert_script_record, write_inventory_csv, ScriptRecord};
pub use script_reader::ScriptReader;
pub use transcript::{MachineEvent, Transcript};
