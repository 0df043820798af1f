//! Vending Machine Library
//! # Overview
//!
//! This library models the transactional core of a retail vending machine:
//! per-slot inventory, coin handling, and resolving a button press into a
//! price display, a purchase with change, or a refund.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Shelf, Notice, outcomes, errors, etc.)
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`core`] - Business logic components:
//!   - [`core::inventory_manager`] - Shelf storage and capacity rules
//!   - [`core::engine`] - Balance handling and button press resolution
//!   - [`core::machine`] - The aggregate implementing both capability traits
//! - [`io`] - Script input, console output and inventory reports
//! - [`runner`] - Replaying scripts against a machine
//!
//! # Capabilities
//!
//! - [`InventoryAdmin`]: add a new product, refill an existing one
//! - [`UserTransaction`]: insert a coin, press a button
//!
//! # Money
//!
//! Amounts are integer cents. Only nickels, dimes and quarters are accepted.
//! Every button press leaves the balance at zero: the user either gets the
//! product and any change, or all inserted money back.

pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use core::{
    Dispenser, DisplaySink, InventoryAdmin, InventoryManager, TransactionEngine, UserTransaction,
    VendingMachine,
};
pub use io::{write_inventory_csv, Console, Transcript};
pub use runner::ScriptRunner;
pub use types::{
    Cents, CoinOutcome, DispenseCommand, MachineCommand, MachineConfig, Notice, PressOutcome,
    Quantity, Shelf, SlotId, VendingError,
};
