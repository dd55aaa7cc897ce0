use rust_decimal::Decimal;

use crate::card::{CardCommand, CardError, CardEvent, CardKind, CardState};
use crate::types::CardNumber;
use crate::{Aggregate, AggregateManager, AggregateState};

/// The card aggregate. Debit and credit cards share the same state and only differ in how much
/// can be withdrawn, see [`CardKind::covers`].
pub struct Card;

impl Card {
    /// Opens a debit card holding `balance`.
    pub fn debit(number: impl Into<CardNumber>, balance: Decimal) -> AggregateManager<Self> {
        AggregateManager::new(AggregateState::new_with_state(
            number,
            CardState::new(balance, CardKind::Debit),
        ))
    }

    /// Opens a credit card holding `balance`, allowed to go down to `-limit`.
    pub fn credit(
        number: impl Into<CardNumber>,
        balance: Decimal,
        limit: Decimal,
    ) -> Result<AggregateManager<Self>, CardError> {
        Self::open(number, balance, CardKind::Credit { limit })
    }

    /// Opens a card of any kind, rejecting negative credit limits.
    pub fn open(
        number: impl Into<CardNumber>,
        balance: Decimal,
        kind: CardKind,
    ) -> Result<AggregateManager<Self>, CardError> {
        if let CardKind::Credit { limit } = kind {
            if limit < Decimal::ZERO {
                return Err(CardError::NegativeCreditLimit);
            }
        }

        Ok(AggregateManager::new(AggregateState::new_with_state(
            number,
            CardState::new(balance, kind),
        )))
    }
}

impl Aggregate for Card {
    const NAME: &'static str = "card";
    type State = CardState;
    type Command = CardCommand;
    type Event = CardEvent;
    type Error = CardError;

    fn handle_command(state: &Self::State, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CardCommand::Deposit { amount } if amount <= Decimal::ZERO => Err(CardError::NonPositiveAmount),
            CardCommand::Deposit { amount } => {
                let balance = state.balance.checked_add(amount).ok_or(CardError::BalanceOverflow)?;
                Ok(vec![CardEvent::Deposited { amount, balance }])
            }
            CardCommand::Withdraw { amount } if amount <= Decimal::ZERO => Err(CardError::NonPositiveAmount),
            CardCommand::Withdraw { amount } if !state.kind.covers(state.balance, amount) => match state.kind {
                CardKind::Debit => Err(CardError::InsufficientBalance),
                CardKind::Credit { .. } => Err(CardError::CreditLimitExceeded),
            },
            CardCommand::Withdraw { amount } => {
                let balance = state.balance.checked_sub(amount).ok_or(CardError::BalanceOverflow)?;
                Ok(vec![CardEvent::Withdrawn { amount, balance }])
            }
        }
    }

    fn apply_event(state: Self::State, payload: Self::Event) -> Self::State {
        match payload {
            CardEvent::Deposited { balance, .. } | CardEvent::Withdrawn { balance, .. } => state.with_balance(balance),
        }
    }
}
