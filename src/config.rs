use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use typed_builder::TypedBuilder;

use crate::card::CardKind;
use crate::types::CardNumber;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("No cards configured")]
    NoCards,

    #[error("Card index {0} is out of range")]
    UnknownCard(usize),

    #[error("Exactly two concurrent withdrawals are expected, found {0}")]
    WithdrawalCount(usize),
}

/// A card opened when the simulation starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct CardConfig {
    #[builder(setter(into))]
    pub number: CardNumber,
    pub balance: Decimal,
    /// Defaults to a debit card.
    #[builder(default)]
    #[serde(default)]
    pub kind: CardKind,
}

/// A deposit made before the concurrent withdrawals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositConfig {
    /// Index in [`SimulationConfig::cards`].
    pub card: usize,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct SimulationConfig {
    /// The cards, listed in this order.
    pub cards: Vec<CardConfig>,
    /// Index in `cards` of the card both withdrawal threads act on.
    #[builder(default)]
    #[serde(default)]
    pub contended_card: usize,
    /// The amounts withdrawn concurrently.
    pub withdrawals: Vec<Decimal>,
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub deposit: Option<DepositConfig>,
}

impl SimulationConfig {
    /// Parses and validates a configuration from its JSON representation.
    ///
    /// This is the entry point for callers embedding the library that keep their scenarios in JSON files;
    /// the `bank-cards` binary always runs [`SimulationConfig::default`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cards.is_empty() {
            return Err(ConfigError::NoCards);
        }

        if self.contended_card >= self.cards.len() {
            return Err(ConfigError::UnknownCard(self.contended_card));
        }

        if let Some(deposit) = &self.deposit {
            if deposit.card >= self.cards.len() {
                return Err(ConfigError::UnknownCard(deposit.card));
            }
        }

        if self.withdrawals.len() != 2 {
            return Err(ConfigError::WithdrawalCount(self.withdrawals.len()));
        }

        Ok(())
    }
}

impl Default for SimulationConfig {
    /// A credit card `123456` (5000, limit 2000) and a debit card `9876543` (3000); two withdrawals of
    /// 100 and 200 race on the credit card.
    fn default() -> Self {
        Self::builder()
            .cards(vec![
                CardConfig::builder()
                    .number("123456")
                    .balance(Decimal::new(50000, 1))
                    .kind(CardKind::Credit {
                        limit: Decimal::new(20000, 1),
                    })
                    .build(),
                CardConfig::builder()
                    .number("9876543")
                    .balance(Decimal::new(30000, 1))
                    .build(),
            ])
            .withdrawals(vec![Decimal::from(100), Decimal::from(200)])
            .build()
    }
}
