use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::types::CardNumber;
use crate::{Aggregate, AggregateState, EventHandler, StoreEvent};

/// The AggregateManager is responsible for coupling the Aggregate with its live state, so that commands
/// are handled one at a time and the resulting events are applied and dispatched to the event handlers.
///
/// The state is kept behind an exclusive lock owned by the manager: every command, and every read of
/// the state, acquires it first. Concurrent callers therefore observe a serial history of changes.
///
/// The basic API is:
/// 1. handle_command
/// 2. load
pub struct AggregateManager<A>
where
    A: Aggregate,
{
    state: Mutex<AggregateState<A::State>>,
    event_handlers: Vec<Box<dyn EventHandler<A>>>,
}

impl<A> AggregateManager<A>
where
    A: Aggregate,
{
    /// Creates a new instance of an [`AggregateManager`] holding the given initial state.
    pub fn new(aggregate_state: AggregateState<A::State>) -> Self {
        Self {
            state: Mutex::new(aggregate_state),
            event_handlers: vec![],
        }
    }

    /// Adds an event handler, run for every event emitted by this aggregate instance.
    pub fn with_event_handler(mut self, event_handler: impl EventHandler<A> + 'static) -> Self {
        self.event_handlers.push(Box::new(event_handler));
        self
    }

    /// Validates and handles the command onto the current state, applies the emitted events and then
    /// passes them to the event handlers.
    ///
    /// The lock is held while validating and applying, and released before the event handlers run.
    /// Handlers invoked from different threads may therefore see events in a different order than they
    /// were applied; each event still carries the state it produced.
    /// A rejected command leaves the state untouched.
    #[tracing::instrument(skip_all, fields(aggregate = A::NAME))]
    pub fn handle_command(&self, command: A::Command) -> Result<Vec<StoreEvent<A::Event>>, A::Error> {
        let store_events: Vec<StoreEvent<A::Event>> = {
            let mut guard = self.state.lock();

            let events: Vec<A::Event> = A::handle_command(guard.inner(), command)?;

            let occurred_on: DateTime<Utc> = Utc::now();
            let aggregate_id: CardNumber = guard.id().clone();
            let first_sequence_number = guard.next_sequence_number();

            let store_events: Vec<StoreEvent<A::Event>> = events
                .iter()
                .cloned()
                .zip(first_sequence_number..)
                .map(|(event, sequence_number)| StoreEvent::new(aggregate_id.clone(), event, occurred_on, sequence_number))
                .collect();

            let updated: AggregateState<A::State> = guard.clone().apply_events(events, A::apply_event);
            *guard = updated;

            tracing::debug!(
                aggregate_id = %guard.id(),
                sequence_number = *guard.sequence_number(),
                "applied {} event(s)",
                store_events.len()
            );

            store_events
        };

        for store_event in &store_events {
            for event_handler in &self.event_handlers {
                let span = tracing::debug_span!(
                    "bank_cards.event_handler",
                    event_id = %store_event.id,
                    aggregate_id = %store_event.aggregate_id,
                    event_handler = event_handler.name()
                );
                let _e = span.enter();

                event_handler.handle(store_event);
            }
        }

        Ok(store_events)
    }

    /// Returns a snapshot of the aggregate state, read under the lock.
    pub fn load(&self) -> AggregateState<A::State> {
        self.state.lock().clone()
    }

    /// Returns the id of the managed aggregate instance.
    pub fn id(&self) -> CardNumber {
        self.state.lock().id().clone()
    }
}
