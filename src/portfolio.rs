use rust_decimal::Decimal;

use crate::card::BankCard;

/// Sums the balances of all the given cards. Each balance is read under its own card lock, so the
/// total is only a consistent snapshot if no other thread is moving money meanwhile.
pub fn total_balance<'a, C, I>(cards: I) -> Decimal
where
    C: BankCard + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
{
    cards.into_iter().map(|card| card.balance()).sum()
}

/// The listing line for a card.
pub fn describe<C>(card: &C) -> String
where
    C: BankCard + ?Sized,
{
    format!("Card Number: {} | Balance: {}", card.number(), card.balance())
}
