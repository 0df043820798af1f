//! Typed results of user-facing machine operations
//!
//! The collaborators receive every visible effect; these values let a caller
//! branch on what happened without inspecting the display or dispenser.

use crate::types::shelf::{Cents, SlotId};

/// Result of inserting one coin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinOutcome {
    /// The coin was added; carries the new balance
    Accepted { balance_cents: Cents },

    /// The denomination is not accepted and the coin was returned
    Rejected { cents: Cents },
}

/// Result of pressing a product button
///
/// Every variant leaves the balance at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The slot is empty; any held balance was refunded
    NoProduct { slot: SlotId, refunded_cents: Cents },

    /// No money was inserted, so only the price was shown
    PriceShown { slot: SlotId, price_cents: Cents },

    /// A unit was dispensed along with `change_cents` (possibly zero)
    Purchased { slot: SlotId, change_cents: Cents },

    /// The balance did not cover the price and was refunded in full
    InsufficientBalance { slot: SlotId, refunded_cents: Cents },
}

impl PressOutcome {
    /// Money returned to the user by this press
    pub fn returned_cents(&self) -> Cents {
        match *self {
            PressOutcome::NoProduct { refunded_cents, .. }
            | PressOutcome::InsufficientBalance { refunded_cents, .. } => refunded_cents,
            PressOutcome::Purchased { change_cents, .. } => change_cents,
            PressOutcome::PriceShown { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_product(PressOutcome::NoProduct { slot: 5, refunded_cents: 30 }, 30)]
    #[case::price_shown(PressOutcome::PriceShown { slot: 3, price_cents: 80 }, 0)]
    #[case::purchased(PressOutcome::Purchased { slot: 1, change_cents: 10 }, 10)]
    #[case::insufficient(PressOutcome::InsufficientBalance { slot: 1, refunded_cents: 25 }, 25)]
    fn test_returned_cents(#[case] outcome: PressOutcome, #[case] expected: Cents) {
        assert_eq!(outcome.returned_cents(), expected);
    }
}
