use std::fmt::{Display, Formatter};
use std::thread;

use rust_decimal::Decimal;

use crate::card::{BankCard, CardError};
use crate::types::CardNumber;

/// A single withdrawal against a card. Running it never fails: the outcome says whether the money
/// was taken or why it was not.
pub struct Transaction<'a, C: ?Sized> {
    card: &'a C,
    amount: Decimal,
}

impl<'a, C> Transaction<'a, C>
where
    C: BankCard + ?Sized,
{
    pub fn new(card: &'a C, amount: Decimal) -> Self {
        Self { card, amount }
    }

    pub fn run(self) -> WithdrawalOutcome {
        match self.card.withdraw(self.amount) {
            Ok(balance) => {
                tracing::info!(card = %self.card.number(), amount = %self.amount, balance = %balance, "withdrawal completed");
                WithdrawalOutcome::Completed {
                    amount: self.amount,
                    balance,
                }
            }
            Err(error) if error.is_insufficient_funds() => {
                tracing::warn!(card = %self.card.number(), amount = %self.amount, error = %error, "withdrawal rejected");
                WithdrawalOutcome::Rejected {
                    amount: self.amount,
                    error,
                }
            }
            Err(error) => {
                tracing::error!(card = %self.card.number(), amount = %self.amount, error = %error, "invalid withdrawal");
                WithdrawalOutcome::Rejected {
                    amount: self.amount,
                    error,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalOutcome {
    /// The amount was taken; `balance` is what the card held right after.
    Completed { amount: Decimal, balance: Decimal },
    /// The card refused the withdrawal and its balance was left unchanged.
    Rejected { amount: Decimal, error: CardError },
    /// The worker never reported back, e.g. it could not be spawned or it panicked.
    Aborted { amount: Decimal, reason: String },
}

impl WithdrawalOutcome {
    pub const fn amount(&self) -> Decimal {
        match self {
            Self::Completed { amount, .. } | Self::Rejected { amount, .. } | Self::Aborted { amount, .. } => *amount,
        }
    }

    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

impl Display for WithdrawalOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed { balance, .. } => write!(f, "Remaining balance: {}", balance),
            Self::Rejected { error, .. } => write!(f, "{}", error),
            Self::Aborted { reason, .. } => write!(f, "Thread interrupted: {}", reason),
        }
    }
}

/// What happened to a batch of concurrent withdrawals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalReport {
    pub card: CardNumber,
    /// One outcome per requested amount, in request order.
    pub outcomes: Vec<WithdrawalOutcome>,
    /// The card balance read after every worker has been joined.
    pub final_balance: Decimal,
}

impl WithdrawalReport {
    pub fn completed(&self) -> impl Iterator<Item = &WithdrawalOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_completed())
    }

    pub fn rejected(&self) -> impl Iterator<Item = &WithdrawalOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, WithdrawalOutcome::Rejected { .. }))
    }

    /// Sum of the amounts actually taken from the card.
    pub fn withdrawn(&self) -> Decimal {
        self.completed().map(WithdrawalOutcome::amount).sum()
    }
}

/// Races two withdrawals against the same card and waits for both.
pub fn concurrent_withdrawal<C>(card: &C, first: Decimal, second: Decimal) -> WithdrawalReport
where
    C: BankCard + ?Sized,
{
    withdraw_concurrently(card, &[first, second])
}

/// Spawns one thread per amount, each running a single [`Transaction`] against `card`, and blocks until
/// all of them are done. The order in which the withdrawals hit the card is up to the scheduler.
#[tracing::instrument(skip_all, fields(card = %card.number(), workers = amounts.len()))]
pub fn withdraw_concurrently<C>(card: &C, amounts: &[Decimal]) -> WithdrawalReport
where
    C: BankCard + ?Sized,
{
    let outcomes: Vec<WithdrawalOutcome> = thread::scope(|scope| {
        let workers: Vec<_> = amounts
            .iter()
            .enumerate()
            .map(|(index, &amount)| {
                let spawned = thread::Builder::new()
                    .name(format!("withdrawal-{}", index))
                    .spawn_scoped(scope, move || Transaction::new(card, amount).run());
                (amount, spawned)
            })
            .collect();

        workers
            .into_iter()
            .map(|(amount, spawned)| match spawned {
                Ok(handle) => handle.join().unwrap_or_else(|_| {
                    tracing::error!(amount = %amount, "withdrawal worker panicked");
                    WithdrawalOutcome::Aborted {
                        amount,
                        reason: "worker panicked".to_string(),
                    }
                }),
                Err(error) => {
                    tracing::error!(amount = %amount, error = %error, "failed to spawn withdrawal worker");
                    WithdrawalOutcome::Aborted {
                        amount,
                        reason: error.to_string(),
                    }
                }
            })
            .collect()
    });

    WithdrawalReport {
        card: card.number(),
        outcomes,
        final_balance: card.balance(),
    }
}
