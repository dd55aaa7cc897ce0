use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::card::{Card, CardEvent, CardKind};
use crate::{EventHandler, StoreEvent};

/// Event handler writing a human readable line for every deposit and withdrawal of a card.
///
/// The writer is shared, so that all the cards of a simulation can report on the same output.
pub struct ConsoleReporter<W> {
    kind: CardKind,
    out: Arc<Mutex<W>>,
}

impl<W> ConsoleReporter<W> {
    pub fn new(kind: CardKind, out: Arc<Mutex<W>>) -> Self {
        Self { kind, out }
    }

    fn line(&self, event: &CardEvent) -> String {
        match event {
            CardEvent::Deposited { balance, .. } => format!("Deposited to {}. New balance: {}", self.kind, balance),
            CardEvent::Withdrawn { balance, .. } => {
                format!("Withdrawn from {}. Remaining balance: {}", self.kind, balance)
            }
        }
    }
}

impl<W> EventHandler<Card> for ConsoleReporter<W>
where
    W: Write + Send,
{
    fn handle(&self, event: &StoreEvent<CardEvent>) {
        let line = self.line(event.payload());
        if let Err(error) = writeln!(self.out.lock(), "{}", line) {
            tracing::warn!({
                event_id = %event.id,
                aggregate_id = %event.aggregate_id,
                error = ?error,
            }, "failed to report card event");
        }
    }

    fn name(&self) -> &'static str {
        "console_reporter"
    }
}
