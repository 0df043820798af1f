//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `shelf`: Shelf records and identifier aliases
//! - `config`: Machine dimensions
//! - `notice`: Display notices and dispense commands
//! - `outcome`: Typed results of coin and button operations
//! - `command`: Scripted machine commands
//! - `error`: Error types for the vending machine

pub mod command;
pub mod config;
pub mod error;
pub mod notice;
pub mod outcome;
pub mod shelf;

pub use command::MachineCommand;
pub use config::MachineConfig;
pub use error::VendingError;
pub use notice::{format_cents, DispenseCommand, Notice};
pub use outcome::{CoinOutcome, PressOutcome};
pub use shelf::{Cents, Quantity, Shelf, SlotId};
