//! Core business logic module
//!
//! This module contains the vending machine components:
//! - `traits` - Capability traits for callers and collaborators
//! - `inventory_manager` - Shelf storage and capacity rules
//! - `engine` - Balance handling and button press resolution
//! - `machine` - The aggregate wiring both to a display and a dispenser

pub mod engine;
pub mod inventory_manager;
pub mod machine;
pub mod traits;

pub use engine::TransactionEngine;
pub use inventory_manager::InventoryManager;
pub use machine::VendingMachine;
pub use traits::{Dispenser, DisplaySink, InventoryAdmin, UserTransaction};
