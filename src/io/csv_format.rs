//! CSV format handling for machine scripts and inventory reports
//!
//! This module centralizes all CSV format concerns, providing:
//! - ScriptRecord structure for deserialization
//! - Conversion from script records to machine commands
//! - Inventory report serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{Cents, MachineCommand, Quantity, Shelf, SlotId, VendingError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the script format with columns: action, slot, name, price, quantity, amount.
/// Every column except `action` is optional because each action only uses
/// some of them. Prices and amounts are in cents.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScriptRecord {
    pub action: String,
    pub slot: Option<SlotId>,
    pub name: Option<String>,
    pub price: Option<Cents>,
    pub quantity: Option<Quantity>,
    pub amount: Option<Cents>,
}

fn required<T>(value: Option<T>, column: &str, action: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("'{}' requires the {} column", action, column))
}

/// Convert a ScriptRecord to a MachineCommand
///
/// This function:
/// - Parses the action name (case-insensitive)
/// - Checks that the columns the action needs are present
/// - Ignores columns the action does not use
///
/// Range checks (negative slots, unaccepted coins) are left to the machine.
///
/// # Returns
///
/// Result containing either:
/// - Ok(MachineCommand) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_script_record(record: ScriptRecord) -> Result<MachineCommand, String> {
    let action = record.action.to_lowercase();

    match action.as_str() {
        "add" => {
            let name = record
                .name
                .filter(|name| !name.trim().is_empty())
                .ok_or_else(|| format!("'{}' requires the name column", action))?;
            Ok(MachineCommand::AddProduct {
                slot: required(record.slot, "slot", &action)?,
                name,
                price_cents: required(record.price, "price", &action)?,
                quantity: required(record.quantity, "quantity", &action)?,
            })
        }
        "refill" => Ok(MachineCommand::Refill {
            slot: required(record.slot, "slot", &action)?,
            quantity: required(record.quantity, "quantity", &action)?,
        }),
        "coin" => Ok(MachineCommand::InsertCoin {
            cents: required(record.amount, "amount", &action)?,
        }),
        "press" => Ok(MachineCommand::PressButton {
            slot: required(record.slot, "slot", &action)?,
        }),
        _ => Err(format!("Unknown action '{}'", record.action)),
    }
}

/// Write shelves to CSV format
///
/// Writes shelves with columns: slot, name, price, quantity. Prices are
/// written in dollars with two decimals. Shelves are sorted by slot id for
/// deterministic output.
///
/// # Errors
///
/// Returns `IoError` if the output cannot be written.
pub fn write_inventory_csv(shelves: &[Shelf], output: &mut dyn Write) -> Result<(), VendingError> {
    use csv::Writer;

    let write_error = |e: csv::Error| VendingError::IoError {
        message: format!("Failed to write inventory record: {}", e),
    };

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["slot", "name", "price", "quantity"])
        .map_err(write_error)?;

    let mut sorted_shelves: Vec<&Shelf> = shelves.iter().collect();
    sorted_shelves.sort_by_key(|shelf| shelf.slot);

    for shelf in sorted_shelves {
        writer
            .write_record(&[
                shelf.slot.to_string(),
                shelf.name.clone(),
                format!("{:.2}", Decimal::new(shelf.price_cents, 2)),
                shelf.quantity.to_string(),
            ])
            .map_err(write_error)?;
    }

    writer.flush()?;

    Ok(())
}
