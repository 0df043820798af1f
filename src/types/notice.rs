//! Messages the machine sends to its collaborators
//!
//! A [`Notice`] goes to the display sink; a [`DispenseCommand`] goes to the
//! dispensing actuator. Both carry content only (amounts, names, slots). The
//! `Display` impls give the default wording used by the console collaborator.

use crate::types::shelf::{Cents, SlotId};
use rust_decimal::Decimal;
use std::fmt;

/// Format a cent amount as dollars, e.g. `80` becomes `$0.80`
pub fn format_cents(cents: Cents) -> String {
    format!("${:.2}", Decimal::new(cents, 2))
}

/// A message for the display sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A coin was accepted; carries the updated balance
    Balance { balance_cents: Cents },

    /// A coin of an unaccepted denomination was returned
    PaymentNotAccepted { cents: Cents },

    /// A stocked slot was selected
    ProductSelected { name: String, price_cents: Cents },

    /// The balance does not cover the selected product
    InsufficientBalance { balance_cents: Cents },

    /// The pressed slot holds no product
    NoProduct { slot: SlotId },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Balance { balance_cents } => {
                write!(f, "Your balance is {}", format_cents(*balance_cents))
            }
            Notice::PaymentNotAccepted { .. } => write!(f, "Payment not accepted"),
            Notice::ProductSelected { name, price_cents } => {
                write!(f, "Selected product {} {}", name, format_cents(*price_cents))
            }
            Notice::InsufficientBalance { balance_cents } => write!(
                f,
                "Not enough balance to purchase selected product. Your balance is {}",
                format_cents(*balance_cents)
            ),
            Notice::NoProduct { slot } => write!(f, "No products for position {}", slot),
        }
    }
}

/// A command for the dispensing actuator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispenseCommand {
    /// Release one unit of a product
    Product { slot: SlotId, name: String },

    /// Return money to the user as one lump amount
    Change { cents: Cents },
}

impl fmt::Display for DispenseCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispenseCommand::Product { slot, name } => {
                write!(f, "Dispensing {} from position {}", name, slot)
            }
            DispenseCommand::Change { cents } => write!(f, "Dispensing {} cents", cents),
        }
    }
}
