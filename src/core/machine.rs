//! The vending machine aggregate
//!
//! `VendingMachine` owns the inventory, the transaction engine and the two
//! hardware collaborators. It is the single type implementing both
//! [`InventoryAdmin`] and [`UserTransaction`].

use crate::core::engine::TransactionEngine;
use crate::core::inventory_manager::InventoryManager;
use crate::core::traits::{Dispenser, DisplaySink, InventoryAdmin, UserTransaction};
use crate::types::{
    Cents, CoinOutcome, MachineConfig, PressOutcome, Quantity, Shelf, SlotId, VendingError,
};

/// A vending machine wired to a display and a dispenser
pub struct VendingMachine<D, P> {
    inventory: InventoryManager,
    engine: TransactionEngine,
    display: D,
    dispenser: P,
}

impl<D, P> VendingMachine<D, P>
where
    D: DisplaySink,
    P: Dispenser,
{
    /// Build an empty machine
    ///
    /// # Errors
    ///
    /// Returns `InvalidConstruction` if `max_shelves` or `shelf_capacity` is
    /// not positive.
    pub fn new(config: MachineConfig, display: D, dispenser: P) -> Result<Self, VendingError> {
        Ok(VendingMachine {
            inventory: InventoryManager::new(config)?,
            engine: TransactionEngine::new(),
            display,
            dispenser,
        })
    }

    /// Dimensions of this machine
    pub fn config(&self) -> MachineConfig {
        self.inventory.config()
    }

    /// Money inserted since the last button press
    pub fn balance(&self) -> Cents {
        self.engine.balance()
    }

    /// Look up the shelf in a slot
    pub fn shelf(&self, slot: SlotId) -> Option<&Shelf> {
        self.inventory.get(slot)
    }

    /// All stocked shelves sorted by slot id
    pub fn shelves(&self) -> Vec<&Shelf> {
        self.inventory.get_all_shelves()
    }

    /// Take the collaborators back, dropping the machine state
    pub fn into_parts(self) -> (D, P) {
        (self.display, self.dispenser)
    }
}

impl<D, P> InventoryAdmin for VendingMachine<D, P>
where
    D: DisplaySink,
    P: Dispenser,
{
    fn add_new_product(
        &mut self,
        slot: SlotId,
        name: &str,
        price_cents: Cents,
        quantity: Quantity,
    ) -> Result<(), VendingError> {
        self.inventory
            .add_new_product(slot, name, price_cents, quantity)
    }

    fn refill_existing_product(
        &mut self,
        slot: SlotId,
        quantity: Quantity,
    ) -> Result<(), VendingError> {
        self.inventory.refill_existing_product(slot, quantity)
    }
}

impl<D, P> UserTransaction for VendingMachine<D, P>
where
    D: DisplaySink,
    P: Dispenser,
{
    fn add_user_money(&mut self, cents: Cents) -> Result<CoinOutcome, VendingError> {
        self.engine.add_user_money(cents, &mut self.display)
    }

    fn button_press(&mut self, slot: SlotId) -> Result<PressOutcome, VendingError> {
        self.engine.button_press(
            slot,
            &mut self.inventory,
            &mut self.display,
            &mut self.dispenser,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::transcript::Transcript;
    use crate::types::DispenseCommand;
    use rstest::rstest;

    fn machine(
        max_shelves: i32,
        shelf_capacity: i32,
    ) -> (VendingMachine<Transcript, Transcript>, Transcript) {
        let transcript = Transcript::new();
        let machine = VendingMachine::new(
            MachineConfig::new(max_shelves, shelf_capacity),
            transcript.clone(),
            transcript.clone(),
        )
        .unwrap();
        (machine, transcript)
    }

    /// Stocking code that only sees the admin capability
    fn stock(admin: &mut dyn InventoryAdmin) -> Result<(), VendingError> {
        admin.add_new_product(1, "Skittles", 45, 2)?;
        admin.add_new_product(3, "Lay's", 80, 7)?;
        admin.refill_existing_product(1, 3)
    }

    /// Customer code that only sees the user capability
    fn buy(user: &mut dyn UserTransaction, coins: &[Cents], slot: SlotId) -> PressOutcome {
        for &coin in coins {
            user.add_user_money(coin).unwrap();
        }
        user.button_press(slot).unwrap()
    }

    #[rstest]
    #[case::negative_capacity(10, -1)]
    #[case::zero_capacity(10, 0)]
    #[case::negative_shelves(-1, 10)]
    #[case::zero_shelves(0, 10)]
    fn test_new_rejects_invalid_dimensions(#[case] max_shelves: i32, #[case] capacity: i32) {
        let transcript = Transcript::new();
        let result = VendingMachine::new(
            MachineConfig::new(max_shelves, capacity),
            transcript.clone(),
            transcript,
        );
        assert!(matches!(
            result,
            Err(VendingError::InvalidConstruction { .. })
        ));
    }

    #[test]
    fn test_huge_machine_builds_and_stocks() {
        let (mut machine, _) = machine(i32::MAX, 10);

        machine.add_new_product(1, "Bounty", 5, 1).unwrap();

        assert_eq!(machine.shelf(1).map(|shelf| shelf.quantity), Some(1));
    }

    #[test]
    fn test_setup_and_price_check() {
        let (mut machine, transcript) = machine(20, 10);

        stock(&mut machine).unwrap();
        assert_eq!(machine.shelf(1).unwrap().quantity, 5);

        let outcome = machine.button_press(3).unwrap();

        assert_eq!(
            outcome,
            PressOutcome::PriceShown {
                slot: 3,
                price_cents: 80,
            }
        );
        assert_eq!(transcript.lines(), vec!["Selected product Lay's $0.80"]);
        assert_eq!(machine.balance(), 0);
    }

    #[test]
    fn test_purchase_with_change() {
        let (mut machine, transcript) = machine(10, 10);
        machine.add_new_product(1, "Bounty", 15, 5).unwrap();

        let outcome = buy(&mut machine, &[25], 1);

        assert_eq!(
            outcome,
            PressOutcome::Purchased {
                slot: 1,
                change_cents: 10,
            }
        );
        let lines = transcript.lines();
        assert_eq!(lines[lines.len() - 2], "Dispensing Bounty from position 1");
        assert_eq!(lines[lines.len() - 1], "Dispensing 10 cents");
        assert_eq!(machine.shelf(1).unwrap().quantity, 4);
        assert_eq!(machine.balance(), 0);
    }

    #[test]
    fn test_purchase_insufficient_balance() {
        let (mut machine, transcript) = machine(10, 10);
        machine.add_new_product(1, "Bounty", 45, 5).unwrap();

        let outcome = buy(&mut machine, &[25], 1);

        assert_eq!(outcome.returned_cents(), 25);
        let lines = transcript.lines();
        assert_eq!(
            lines[lines.len() - 2],
            "Not enough balance to purchase selected product. Your balance is $0.25"
        );
        assert_eq!(lines[lines.len() - 1], "Dispensing 25 cents");
        assert_eq!(machine.shelf(1).unwrap().quantity, 5);
        assert_eq!(machine.balance(), 0);
    }

    #[test]
    fn test_press_empty_slot_without_money() {
        let (mut machine, transcript) = machine(10, 10);

        machine.button_press(5).unwrap();

        assert_eq!(transcript.lines(), vec!["No products for position 5"]);
        assert!(transcript.dispensed().is_empty());
        assert_eq!(machine.balance(), 0);
    }

    #[test]
    fn test_demo_purchase_returns_nickel() {
        let (mut machine, transcript) = machine(20, 10);
        stock(&mut machine).unwrap();

        buy(&mut machine, &[25, 25], 1);

        assert_eq!(
            transcript.dispensed(),
            vec![
                DispenseCommand::Product {
                    slot: 1,
                    name: "Skittles".to_string(),
                },
                DispenseCommand::Change { cents: 5 },
            ]
        );
        assert_eq!(machine.shelf(1).unwrap().quantity, 4);
    }

    #[test]
    fn test_admin_errors_do_not_touch_balance() {
        let (mut machine, _transcript) = machine(1, 10);
        machine.add_user_money(10).unwrap();
        machine.add_new_product(1, "Mars", 200, 1).unwrap();

        assert!(machine.add_new_product(2, "Mars", 200, 1).is_err());
        assert!(machine.refill_existing_product(1, 10).is_err());
        assert_eq!(machine.balance(), 10);
    }

    #[test]
    fn test_selling_out_frees_the_slot() {
        let (mut machine, _transcript) = machine(1, 10);
        machine.add_new_product(1, "Gum", 5, 1).unwrap();

        buy(&mut machine, &[5], 1);

        assert!(machine.shelf(1).is_none());
        assert!(machine.shelves().is_empty());
        assert!(machine.add_new_product(2, "Mints", 10, 4).is_ok());
    }

    #[test]
    fn test_into_parts_returns_collaborators() {
        let (mut machine, _transcript) = machine(10, 10);
        machine.add_user_money(25).unwrap();

        let (display, _dispenser) = machine.into_parts();

        assert_eq!(display.lines(), vec!["Your balance is $0.25"]);
    }
}
