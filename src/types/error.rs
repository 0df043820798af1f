//! Error types for the vending machine
//!
//! This module defines all error types that can occur while configuring,
//! stocking, operating, or scripting a machine.
//!
//! # Error Categories
//!
//! - **Construction Errors**: Non-positive shelf count or shelf capacity
//! - **Argument Errors**: Negative slot ids, coins below one cent, non-positive prices or quantities
//! - **Inventory Errors**: Duplicate slots, unknown slots, capacity and free-slot limits
//! - **Script Errors**: File not found, I/O failures, malformed CSV rows
//!
//! Coin rejection and pressing an empty slot are not errors; they are normal
//! outcomes reported through the display sink.

use crate::types::shelf::SlotId;
use thiserror::Error;

/// Main error type for the vending machine
///
/// Every core error aborts the triggering call before any state is mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VendingError {
    /// Machine configured with a non-positive shelf count or capacity
    #[error("Invalid machine configuration: max_shelves ({max_shelves}) and shelf_capacity ({shelf_capacity}) must both be greater than zero")]
    InvalidConstruction {
        /// Requested maximum number of shelves
        max_shelves: i32,
        /// Requested capacity of a single shelf
        shelf_capacity: i32,
    },

    /// An argument is outside its accepted range
    #[error("Invalid {argument} {value}: expected {expected}")]
    InvalidArgument {
        /// Name of the offending argument
        argument: String,
        /// The value that was passed
        value: i64,
        /// Human readable description of the accepted range
        expected: String,
    },

    /// A new product targets a slot that is already occupied
    #[error("Slot {slot} is already occupied")]
    DuplicateSlot {
        /// The occupied slot
        slot: SlotId,
    },

    /// The resulting quantity would not fit on the shelf
    #[error("Not enough free space on shelf {slot}: requested {requested}, capacity {capacity}")]
    CapacityExceeded {
        /// Slot being stocked
        slot: SlotId,
        /// Quantity the shelf would hold after the operation
        requested: i64,
        /// Shelf capacity of the machine
        capacity: i32,
    },

    /// Every shelf in the machine is already occupied
    #[error("No free shelves in the machine (maximum {max_shelves})")]
    NoFreeSlot {
        /// Maximum number of shelves in the machine
        max_shelves: i32,
    },

    /// A refill targets a slot with no product
    #[error("Slot {slot} is not registered with any product")]
    UnknownSlot {
        /// The unoccupied slot
        slot: SlotId,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Script file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading a script or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable while replaying a script: the row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A script row could not be turned into a machine command
    #[error("Invalid command{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidCommand {
        /// Line number of the row (if available)
        line: Option<u64>,
        /// What was wrong with the row
        message: String,
    },
}

impl From<std::io::Error> for VendingError {
    fn from(error: std::io::Error) -> Self {
        VendingError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for VendingError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        VendingError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl VendingError {
    /// Create an InvalidConstruction error
    pub fn invalid_construction(max_shelves: i32, shelf_capacity: i32) -> Self {
        VendingError::InvalidConstruction {
            max_shelves,
            shelf_capacity,
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(argument: &str, value: i64, expected: &str) -> Self {
        VendingError::InvalidArgument {
            argument: argument.to_string(),
            value,
            expected: expected.to_string(),
        }
    }

    /// Create a DuplicateSlot error
    pub fn duplicate_slot(slot: SlotId) -> Self {
        VendingError::DuplicateSlot { slot }
    }

    /// Create a CapacityExceeded error
    pub fn capacity_exceeded(slot: SlotId, requested: i64, capacity: i32) -> Self {
        VendingError::CapacityExceeded {
            slot,
            requested,
            capacity,
        }
    }

    /// Create a NoFreeSlot error
    pub fn no_free_slot(max_shelves: i32) -> Self {
        VendingError::NoFreeSlot { max_shelves }
    }

    /// Create an UnknownSlot error
    pub fn unknown_slot(slot: SlotId) -> Self {
        VendingError::UnknownSlot { slot }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        VendingError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(line: Option<u64>, message: impl Into<String>) -> Self {
        VendingError::InvalidCommand {
            line,
            message: message.into(),
        }
    }
}
