//! Transaction engine
//!
//! This module provides the TransactionEngine that owns the running balance
//! and resolves coins and button presses against the inventory.
//!
//! The engine enforces business rules such as:
//! - Only nickels, dimes and quarters are added to the balance
//! - Every button press ends with the balance at zero, whatever its outcome
//! - An insufficient balance is refunded in full, never kept as a partial payment
//! - Change is returned as a single lump amount

use crate::core::inventory_manager::{validate_slot, InventoryManager};
use crate::core::traits::{Dispenser, DisplaySink};
use crate::types::{Cents, CoinOutcome, DispenseCommand, Notice, PressOutcome, SlotId, VendingError};
use tracing::{debug, info};

/// Transaction engine
///
/// Cycles between `Idle` (balance zero) and `Funded` (balance above zero).
/// Accepted coins move it to `Funded`; any button press moves it back to `Idle`.
#[derive(Debug, Default)]
pub struct TransactionEngine {
    balance_cents: Cents,
}

impl TransactionEngine {
    /// Coin values the machine accepts, in cents
    pub const ACCEPTED_DENOMINATIONS: [Cents; 3] = [5, 10, 25];

    /// Create an engine with a zero balance
    pub fn new() -> Self {
        TransactionEngine { balance_cents: 0 }
    }

    /// Money inserted since the last button press
    pub fn balance(&self) -> Cents {
        self.balance_cents
    }

    /// Whether a coin of this value is accepted
    pub fn accepts(cents: Cents) -> bool {
        Self::ACCEPTED_DENOMINATIONS.contains(&cents)
    }

    /// Insert one coin
    ///
    /// An accepted coin is added to the balance and the new balance is shown.
    /// Any other positive value is returned with a "payment not accepted"
    /// notice; that is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `cents` is below one (`InvalidArgument`)
    /// - The balance would overflow (`ArithmeticOverflow`)
    pub fn add_user_money<D>(
        &mut self,
        cents: Cents,
        display: &mut D,
    ) -> Result<CoinOutcome, VendingError>
    where
        D: DisplaySink + ?Sized,
    {
        if cents < 1 {
            return Err(VendingError::invalid_argument(
                "cents",
                cents,
                "at least 1 cent",
            ));
        }

        if !Self::accepts(cents) {
            debug!(cents, "coin rejected");
            display.show(&Notice::PaymentNotAccepted { cents });
            return Ok(CoinOutcome::Rejected { cents });
        }

        let balance_cents = self
            .balance_cents
            .checked_add(cents)
            .ok_or_else(|| VendingError::arithmetic_overflow("add_user_money"))?;
        self.balance_cents = balance_cents;

        debug!(cents, balance_cents, "coin accepted");
        display.show(&Notice::Balance { balance_cents });

        Ok(CoinOutcome::Accepted { balance_cents })
    }

    /// Resolve a button press
    ///
    /// Used both for price checks and purchases:
    /// 1. Empty slot: show "no product", refund any balance.
    /// 2. Otherwise show the product name and price.
    /// 3. Zero balance: nothing else happens (price check).
    /// 4. Balance covers the price: dispense the product, take one unit from
    ///    the shelf and dispense any change.
    /// 5. Balance too low: show the balance and refund it in full.
    ///
    /// The balance is zero when this returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative slot id. The balance is left
    /// untouched in that case.
    pub fn button_press<D, P>(
        &mut self,
        slot: SlotId,
        inventory: &mut InventoryManager,
        display: &mut D,
        dispenser: &mut P,
    ) -> Result<PressOutcome, VendingError>
    where
        D: DisplaySink + ?Sized,
        P: Dispenser + ?Sized,
    {
        validate_slot(slot)?;

        let Some(shelf) = inventory.get(slot) else {
            display.show(&Notice::NoProduct { slot });
            let refunded_cents = self.refund(dispenser);
            return Ok(PressOutcome::NoProduct {
                slot,
                refunded_cents,
            });
        };

        let name = shelf.name.clone();
        let price_cents = shelf.price_cents;
        display.show(&Notice::ProductSelected {
            name: name.clone(),
            price_cents,
        });

        if self.balance_cents == 0 {
            return Ok(PressOutcome::PriceShown { slot, price_cents });
        }

        if self.balance_cents >= price_cents {
            let remaining = inventory.take_one(slot)?;
            let balance_cents = std::mem::take(&mut self.balance_cents);
            let change_cents = balance_cents - price_cents;

            dispenser.dispense(&DispenseCommand::Product { slot, name });
            if change_cents > 0 {
                dispenser.dispense(&DispenseCommand::Change {
                    cents: change_cents,
                });
            }

            info!(slot, price_cents, change_cents, remaining, "product sold");
            return Ok(PressOutcome::Purchased { slot, change_cents });
        }

        display.show(&Notice::InsufficientBalance {
            balance_cents: self.balance_cents,
        });
        let refunded_cents = self.refund(dispenser);

        Ok(PressOutcome::InsufficientBalance {
            slot,
            refunded_cents,
        })
    }

    /// Return the whole balance as change and reset it
    fn refund<P>(&mut self, dispenser: &mut P) -> Cents
    where
        P: Dispenser + ?Sized,
    {
        let balance_cents = std::mem::take(&mut self.balance_cents);
        if balance_cents > 0 {
            dispenser.dispense(&DispenseCommand::Change {
                cents: balance_cents,
            });
            info!(refunded_cents = balance_cents, "balance refunded");
        }
        balance_cents
    }
}
