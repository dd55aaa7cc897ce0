use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Events emitted by a [`crate::card::Card`]. Each one carries the balance resulting from it, so that
/// handlers can report it without reading the card again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardEvent {
    Deposited { amount: Decimal, balance: Decimal },
    Withdrawn { amount: Decimal, balance: Decimal },
}

impl CardEvent {
    pub const fn amount(&self) -> Decimal {
        match self {
            Self::Deposited { amount, .. } | Self::Withdrawn { amount, .. } => *amount,
        }
    }

    /// The balance of the card right after this event.
    pub const fn balance(&self) -> Decimal {
        match self {
            Self::Deposited { balance, .. } | Self::Withdrawn { balance, .. } => *balance,
        }
    }
}
