/// The Aggregate trait is responsible for validating commands, mapping commands to events, and applying
/// events onto the state.
///
/// An Aggregate should be able to derive its own state from nothing but its initial configuration, and the
/// events it has emitted so far. Aggregates are not meant to hold any runtime state themselves: that is kept
/// in an [`crate::AggregateState`], guarded by the [`crate::AggregateManager`].
pub trait Aggregate {
    /// The name identifies the aggregate in tracing spans and logs.
    const NAME: &'static str;

    /// Internal aggregate state. This will be wrapped in [`crate::AggregateState`] and could be used to validate
    /// commands.
    type State: Clone + Send;

    /// A command is an action that the caller can execute over an aggregate in order to let it emit
    /// an event.
    type Command: Send;

    /// An event represents a fact that took place in the domain. They are the source of truth;
    /// the state is derived from the events.
    type Event: Clone + Send + Sync;

    /// This associated type is used to get domain errors while handling a command.
    type Error: std::error::Error;

    /// Handles, validates a command and emits events.
    ///
    /// If the command is rejected no event is emitted and the state is left untouched.
    fn handle_command(state: &Self::State, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Updates the aggregate state using the new event. This assumes that the event can be correctly applied
    /// to the state.
    ///
    /// If this is not the case, this function is allowed to panic.
    fn apply_event(state: Self::State, payload: Self::Event) -> Self::State;
}
