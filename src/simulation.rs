use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::card::{BankCard, Card, CardError, ConsoleReporter};
use crate::config::{ConfigError, SimulationConfig};
use crate::portfolio::{describe, total_balance};
use crate::transaction::{concurrent_withdrawal, WithdrawalReport};
use crate::AggregateManager;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Card(#[from] CardError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// What a full simulation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationSummary {
    pub withdrawals: WithdrawalReport,
    /// Balance of every configured card at the end of the run, in configuration order.
    pub balances: Vec<Decimal>,
    pub total_balance: Decimal,
}

/// Opens the configured cards, lists them, races the configured withdrawals on the contended card and
/// prints the total balance. Everything is written on `out`; card operations are reported as they happen.
///
/// Failed withdrawals are part of the normal outcome and do not make the run fail.
pub fn run<W>(config: &SimulationConfig, out: Arc<Mutex<W>>) -> Result<SimulationSummary, SimulationError>
where
    W: Write + Send + 'static,
{
    config.validate()?;

    let cards: Vec<AggregateManager<Card>> = config
        .cards
        .iter()
        .map(|card| {
            Card::open(card.number.clone(), card.balance, card.kind)
                .map(|manager| manager.with_event_handler(ConsoleReporter::new(card.kind, out.clone())))
        })
        .collect::<Result<_, CardError>>()?;

    tracing::info!(cards = cards.len(), "cards opened");

    for card in &cards {
        writeln!(out.lock(), "{}", describe(card))?;
    }

    if let Some(deposit) = &config.deposit {
        let card = &cards[deposit.card];
        if let Err(error) = card.deposit(deposit.amount) {
            tracing::warn!(card = %card.number(), error = %error, "deposit rejected");
            writeln!(out.lock(), "{}", error)?;
        }
    }

    let contended = &cards[config.contended_card];
    let withdrawals = concurrent_withdrawal(contended, config.withdrawals[0], config.withdrawals[1]);

    for message in failure_messages(&withdrawals) {
        writeln!(out.lock(), "{}", message)?;
    }

    let total = total_balance(&cards);
    writeln!(out.lock(), "Total balance across all cards: {}", total)?;

    Ok(SimulationSummary {
        withdrawals,
        balances: cards.iter().map(BankCard::balance).collect(),
        total_balance: total,
    })
}

/// Lines that a rejected or aborted withdrawal reports.
pub fn failure_messages(report: &WithdrawalReport) -> Vec<String> {
    report
        .outcomes
        .iter()
        .filter(|outcome| !outcome.is_completed())
        .map(ToString::to_string)
        .collect()
}
