//! In-memory bank cards built on a small aggregate model.
//!
//! A card is an [`Aggregate`]: commands are validated against its state and turned into events, which
//! are then applied to the state. The [`AggregateManager`] keeps the live state of one card behind an
//! exclusive lock, so that deposits and withdrawals coming from different threads are serialized.
//!
//! The [`transaction`] module races withdrawals against a single card on separate threads and reports
//! which of them went through.

pub use crate::aggregate::Aggregate;
pub use crate::event::StoreEvent;
pub use crate::handler::EventHandler;
pub use crate::manager::AggregateManager;
pub use crate::state::AggregateState;
pub use crate::types::{CardNumber, SequenceNumber};

mod aggregate;
mod event;
mod handler;
mod manager;
mod state;
mod types;

pub mod card;
pub mod config;
pub mod portfolio;
pub mod simulation;
pub mod transaction;
