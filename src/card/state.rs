use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two card variants. A credit card can overdraw its balance down to `-limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardKind {
    #[default]
    Debit,
    Credit {
        limit: Decimal,
    },
}

impl CardKind {
    /// Whether a card of this kind holding `balance` can pay out `amount`.
    ///
    /// A credit line so large that `balance + limit` overflows covers any amount.
    pub fn covers(&self, balance: Decimal, amount: Decimal) -> bool {
        match self {
            Self::Debit => balance >= amount,
            Self::Credit { limit } => balance.checked_add(*limit).map_or(true, |spendable| spendable >= amount),
        }
    }
}

impl Display for CardKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debit => f.write_str("Debit Card"),
            Self::Credit { .. } => f.write_str("Credit Card"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub balance: Decimal,
    pub kind: CardKind,
}

impl CardState {
    pub const fn new(balance: Decimal, kind: CardKind) -> Self {
        Self { balance, kind }
    }

    pub fn with_balance(self, balance: Decimal) -> Self {
        Self { balance, ..self }
    }
}
