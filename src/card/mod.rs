//! Debit and credit cards, modelled as a single [`Card`] aggregate.

pub use aggregate::Card;
pub use command::CardCommand;
pub use error::CardError;
pub use event::CardEvent;
pub use reporter::ConsoleReporter;
pub use state::{CardKind, CardState};

use rust_decimal::Decimal;

use crate::types::CardNumber;
use crate::AggregateManager;

mod aggregate;
mod command;
mod error;
mod event;
mod reporter;
mod state;

/// The capabilities shared by every bank card: deposits and withdrawals over a lock-guarded balance.
///
/// Every method acquires the card's lock, so that calls from different threads are serialized.
pub trait BankCard: Send + Sync {
    fn number(&self) -> CardNumber;

    fn kind(&self) -> CardKind;

    fn balance(&self) -> Decimal;

    /// Adds `amount` to the balance and returns the new balance.
    fn deposit(&self, amount: Decimal) -> Result<Decimal, CardError>;

    /// Takes `amount` from the balance and returns the remaining balance. On error the balance is unchanged.
    fn withdraw(&self, amount: Decimal) -> Result<Decimal, CardError>;
}

impl BankCard for AggregateManager<Card> {
    fn number(&self) -> CardNumber {
        self.id()
    }

    fn kind(&self) -> CardKind {
        self.load().inner().kind
    }

    fn balance(&self) -> Decimal {
        self.load().inner().balance
    }

    fn deposit(&self, amount: Decimal) -> Result<Decimal, CardError> {
        let events = self.handle_command(CardCommand::Deposit { amount })?;
        Ok(events
            .last()
            .map_or_else(|| self.balance(), |event| event.payload().balance()))
    }

    fn withdraw(&self, amount: Decimal) -> Result<Decimal, CardError> {
        let events = self.handle_command(CardCommand::Withdraw { amount })?;
        Ok(events
            .last()
            .map_or_else(|| self.balance(), |event| event.payload().balance()))
    }
}
