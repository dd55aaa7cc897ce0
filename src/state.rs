use crate::types::{CardNumber, SequenceNumber};

/// The internal state for an Aggregate.
/// It contains:
/// - an id uniquely representing the aggregate,
/// - an incremental sequence number, bumped by one for every applied event,
/// - a state defined by the user of this library.
#[derive(Debug, Clone)]
pub struct AggregateState<S> {
    id: CardNumber,
    sequence_number: SequenceNumber,
    inner: S,
}

impl<S> AggregateState<S> {
    /// Creates a new instance of an [`AggregateState`] with the given id and initial inner state.
    pub fn new_with_state(id: impl Into<CardNumber>, inner: S) -> Self {
        Self {
            id: id.into(),
            sequence_number: 0,
            inner,
        }
    }

    /// Returns the card number identifying the aggregate.
    pub const fn id(&self) -> &CardNumber {
        &self.id
    }

    /// Returns the number of events applied so far.
    pub const fn sequence_number(&self) -> &SequenceNumber {
        &self.sequence_number
    }

    /// Returns the internal state.
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Consumes the aggregate state and generates a new one with the events applied to it.
    pub(crate) fn apply_events<E>(self, events: impl IntoIterator<Item = E>, function: fn(S, E) -> S) -> Self {
        let Self {
            id,
            mut sequence_number,
            inner,
        } = self;

        let inner = events.into_iter().fold(inner, |acc, event| {
            sequence_number += 1;
            function(acc, event)
        });

        Self {
            id,
            sequence_number,
            inner,
        }
    }

    /// Returns the sequence number the next applied event will carry.
    pub(crate) fn next_sequence_number(&self) -> SequenceNumber {
        self.sequence_number + 1
    }
}

impl<S: Default> AggregateState<S> {
    /// Creates a new instance of an [`AggregateState`] with the given id and a default inner state.
    pub fn with_id(id: impl Into<CardNumber>) -> Self {
        Self::new_with_state(id, S::default())
    }
}
