//! Capability traits for the vending machine and its collaborators
//!
//! Callers depend on the narrow capability they need: stocking code takes an
//! [`InventoryAdmin`], customer-facing code takes a [`UserTransaction`]. One
//! concrete machine implements both. The machine in turn talks to its
//! hardware only through [`DisplaySink`] and [`Dispenser`].

use crate::types::{
    Cents, CoinOutcome, DispenseCommand, Notice, PressOutcome, Quantity, SlotId, VendingError,
};

/// Admin operations for stocking the machine
pub trait InventoryAdmin {
    /// Occupy an empty slot with a new product
    fn add_new_product(
        &mut self,
        slot: SlotId,
        name: &str,
        price_cents: Cents,
        quantity: Quantity,
    ) -> Result<(), VendingError>;

    /// Add units to an occupied slot
    fn refill_existing_product(
        &mut self,
        slot: SlotId,
        quantity: Quantity,
    ) -> Result<(), VendingError>;
}

/// User operations for paying and selecting products
pub trait UserTransaction {
    /// Insert one coin
    fn add_user_money(&mut self, cents: Cents) -> Result<CoinOutcome, VendingError>;

    /// Press a product button, for price checking or purchasing
    fn button_press(&mut self, slot: SlotId) -> Result<PressOutcome, VendingError>;
}

/// Receives messages meant for the user
///
/// Calls are fire-and-forget: the machine never looks at a result.
pub trait DisplaySink {
    fn show(&mut self, notice: &Notice);
}

/// Physically releases products and change
///
/// Assumed to always succeed.
pub trait Dispenser {
    fn dispense(&mut self, command: &DispenseCommand);
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn show(&mut self, notice: &Notice) {
        (**self).show(notice)
    }
}

impl<T: Dispenser + ?Sized> Dispenser for &mut T {
    fn dispense(&mut self, command: &DispenseCommand) {
        (**self).dispense(command)
    }
}
