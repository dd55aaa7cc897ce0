use rust_decimal::Decimal;

/// Commands accepted by a [`crate::card::Card`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardCommand {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
}
