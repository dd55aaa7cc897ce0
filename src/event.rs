use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::types::{CardNumber, SequenceNumber};

/// A `StoreEvent` contains the payload (the original event) alongside the event's metadata.
///
/// Envelopes are handed to event handlers and returned to the caller of
/// [`crate::AggregateManager::handle_command`]; they are not retained anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct StoreEvent<Event> {
    /// Uniquely identifies an event among all events emitted from all aggregates.
    pub id: Uuid,
    /// The aggregate instance that emitted the event.
    pub aggregate_id: CardNumber,
    /// The original, emitted, event.
    pub payload: Event,
    /// The timestamp of when the event has been applied.
    pub occurred_on: DateTime<Utc>,
    /// The sequence number of the event, within its specific aggregate instance.
    pub sequence_number: SequenceNumber,
}

impl<Event> StoreEvent<Event> {
    pub(crate) fn new(
        aggregate_id: CardNumber,
        payload: Event,
        occurred_on: DateTime<Utc>,
        sequence_number: SequenceNumber,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            aggregate_id,
            payload,
            occurred_on,
            sequence_number,
        }
    }

    /// Returns the sequence number of the event, within its specific aggregate instance.
    pub const fn sequence_number(&self) -> &SequenceNumber {
        &self.sequence_number
    }

    /// Returns the original, emitted, event.
    pub const fn payload(&self) -> &Event {
        &self.payload
    }
}
