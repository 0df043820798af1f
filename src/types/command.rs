//! Scripted machine commands
//!
//! A script is an ordered list of the four calls a caller can make on a
//! machine: two admin calls and two user calls.

use crate::types::shelf::{Cents, Quantity, SlotId};

/// One call replayed against a machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineCommand {
    /// Stock a new product in an empty slot
    AddProduct {
        slot: SlotId,
        name: String,
        price_cents: Cents,
        quantity: Quantity,
    },

    /// Add units to an occupied slot
    Refill { slot: SlotId, quantity: Quantity },

    /// Insert one coin
    InsertCoin { cents: Cents },

    /// Press a product button
    PressButton { slot: SlotId },
}

impl MachineCommand {
    /// Short lowercase name of the command, as written in scripts
    pub fn action(&self) -> &'static str {
        match self {
            MachineCommand::AddProduct { .. } => "add",
            MachineCommand::Refill { .. } => "refill",
            MachineCommand::InsertCoin { .. } => "coin",
            MachineCommand::PressButton { .. } => "press",
        }
    }
}
