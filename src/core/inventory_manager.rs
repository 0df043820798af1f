//! Inventory management module
//!
//! This module provides the `InventoryManager` struct which owns every shelf
//! in the machine and enforces the capacity rules.
//!
//! The InventoryManager is responsible for:
//! - Admitting new shelves while free slots remain
//! - Refilling existing shelves without exceeding shelf capacity
//! - Removing a unit on purchase, and the shelf itself once it is empty
//! - Providing sorted shelf listings for reports

use crate::types::{Cents, MachineConfig, Quantity, Shelf, SlotId, VendingError};
use std::collections::HashMap;
use tracing::debug;

/// Reject negative slot ids
pub fn validate_slot(slot: SlotId) -> Result<(), VendingError> {
    if slot < 0 {
        return Err(VendingError::invalid_argument(
            "slot",
            i64::from(slot),
            "a non-negative slot id",
        ));
    }
    Ok(())
}

fn validate_quantity(quantity: Quantity) -> Result<(), VendingError> {
    if quantity < 1 {
        return Err(VendingError::invalid_argument(
            "quantity",
            i64::from(quantity),
            "at least 1 unit",
        ));
    }
    Ok(())
}

/// Manages all shelves of one machine
///
/// Invariants held between calls:
/// - at most `max_shelves` shelves are stored
/// - every stored shelf holds `1..=shelf_capacity` units
pub struct InventoryManager {
    config: MachineConfig,
    /// Map of slot ids to shelves
    shelves: HashMap<SlotId, Shelf>,
}

impl InventoryManager {
    /// Create an empty inventory for a machine of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidConstruction` if either dimension is not positive.
    pub fn new(config: MachineConfig) -> Result<Self, VendingError> {
        config.validate()?;

        Ok(InventoryManager {
            config,
            shelves: HashMap::new(),
        })
    }

    /// Dimensions this inventory was built with
    pub fn config(&self) -> MachineConfig {
        self.config
    }

    /// Look up the shelf in a slot
    pub fn get(&self, slot: SlotId) -> Option<&Shelf> {
        self.shelves.get(&slot)
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.shelves.len()
    }

    /// Get all shelves sorted by slot id
    ///
    /// Sorting gives deterministic output for inventory reports.
    pub fn get_all_shelves(&self) -> Vec<&Shelf> {
        let mut shelves: Vec<&Shelf> = self.shelves.values().collect();
        shelves.sort_by_key(|shelf| shelf.slot);
        shelves
    }

    /// Occupy an empty slot with a new product
    ///
    /// Arguments are validated first. After that the duplicate check runs
    /// before the free-slot and capacity checks, since an occupied slot means
    /// the caller wanted a refill.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The slot id is negative, or the price or quantity is not positive (`InvalidArgument`)
    /// - The slot is already occupied (`DuplicateSlot`)
    /// - Every slot is already occupied (`NoFreeSlot`)
    /// - The quantity exceeds the shelf capacity (`CapacityExceeded`)
    pub fn add_new_product(
        &mut self,
        slot: SlotId,
        name: &str,
        price_cents: Cents,
        quantity: Quantity,
    ) -> Result<(), VendingError> {
        validate_slot(slot)?;
        if price_cents < 1 {
            return Err(VendingError::invalid_argument(
                "price",
                price_cents,
                "a positive price in cents",
            ));
        }
        validate_quantity(quantity)?;

        if self.shelves.contains_key(&slot) {
            return Err(VendingError::duplicate_slot(slot));
        }

        if self.shelves.len() >= self.config.max_shelves as usize {
            return Err(VendingError::no_free_slot(self.config.max_shelves));
        }

        if quantity > self.config.shelf_capacity {
            return Err(VendingError::capacity_exceeded(
                slot,
                i64::from(quantity),
                self.config.shelf_capacity,
            ));
        }

        self.shelves
            .insert(slot, Shelf::new(slot, name, price_cents, quantity));
        debug!(slot, name, price_cents, quantity, "shelf added");

        Ok(())
    }

    /// Add units to an occupied slot
    ///
    /// The refill is additive: the new quantity is the current quantity plus
    /// `quantity`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The slot id is negative or the quantity is not positive (`InvalidArgument`)
    /// - The slot holds no product (`UnknownSlot`)
    /// - The resulting quantity exceeds the shelf capacity (`CapacityExceeded`)
    pub fn refill_existing_product(
        &mut self,
        slot: SlotId,
        quantity: Quantity,
    ) -> Result<(), VendingError> {
        validate_slot(slot)?;
        validate_quantity(quantity)?;

        let capacity = self.config.shelf_capacity;
        let shelf = self
            .shelves
            .get_mut(&slot)
            .ok_or_else(|| VendingError::unknown_slot(slot))?;

        // Widened so the sum cannot overflow before the comparison
        let requested = i64::from(shelf.quantity) + i64::from(quantity);
        if requested > i64::from(capacity) {
            return Err(VendingError::capacity_exceeded(slot, requested, capacity));
        }

        shelf.quantity += quantity;
        debug!(slot, quantity = shelf.quantity, "shelf refilled");

        Ok(())
    }

    /// Remove one unit from a shelf
    ///
    /// The shelf is removed entirely when its last unit is taken.
    ///
    /// # Returns
    ///
    /// The number of units left on the shelf
    ///
    /// # Errors
    ///
    /// Returns `UnknownSlot` if the slot holds no product.
    pub fn take_one(&mut self, slot: SlotId) -> Result<Quantity, VendingError> {
        let shelf = self
            .shelves
            .get_mut(&slot)
            .ok_or_else(|| VendingError::unknown_slot(slot))?;

        if shelf.quantity <= 1 {
            self.shelves.remove(&slot);
            debug!(slot, "last unit sold, shelf removed");
            return Ok(0);
        }

        shelf.quantity -= 1;
        Ok(shelf.quantity)
    }
}
