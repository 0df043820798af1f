//! Shelf-related types for the vending machine
//!
//! This module defines the Shelf structure and the identifiers used to
//! address slots and express money and stock amounts.

/// Slot identifier
///
/// Signed so that a negative button press can be reported as an invalid
/// argument instead of being unrepresentable at the call site.
pub type SlotId = i32;

/// Money amount in cents
pub type Cents = i64;

/// Number of product units on a shelf
pub type Quantity = i32;

/// One stocked slot in the machine
///
/// All units on a shelf share the same name and price. The name and price
/// never change after the shelf is created; only the quantity moves, through
/// refills and purchases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shelf {
    /// The slot this shelf occupies
    pub slot: SlotId,

    /// Display label of the product
    pub name: String,

    /// Price of one unit in cents (always positive)
    pub price_cents: Cents,

    /// Units currently on the shelf
    ///
    /// Always in `1..=shelf_capacity` while the shelf is stored. A shelf whose
    /// last unit is sold is removed rather than kept at zero.
    pub quantity: Quantity,
}

impl Shelf {
    /// Create a new shelf record
    ///
    /// No validation happens here; the inventory manager checks arguments and
    /// capacity before constructing a shelf.
    pub fn new(slot: SlotId, name: impl Into<String>, price_cents: Cents, quantity: Quantity) -> Self {
        Shelf {
            slot,
            name: name.into(),
            price_cents,
            quantity,
        }
    }
}
