use std::ops::Deref;

use crate::{Aggregate, StoreEvent};

/// This trait is used to implement an `EventHandler`. An event handler is intended to be an entity
/// which reacts to the events an aggregate emits and performs side effects, e.g. reporting them.
///
/// Handlers run after the aggregate lock has been released, so they must not rely on reading the
/// aggregate state: everything they need should be carried by the event itself.
pub trait EventHandler<A>: Send + Sync
where
    A: Aggregate,
{
    /// Handle an event and perform an action.
    /// All the errors should be handled from within the `EventHandler` and shouldn't panic.
    fn handle(&self, event: &StoreEvent<A::Event>);

    /// The name of the event handler. By default, this is the type name of the event handler,
    /// but it can be overridden to provide a custom name. This name is used as
    /// part of tracing spans, to identify the event handler being run.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Blanket implementation making an [`EventHandler`] every (smart) pointer to an [`EventHandler`],
/// e.g. `&Handler`, `Box<Handler>`, `Arc<Handler>`.
impl<A, Q, T> EventHandler<A> for T
where
    A: Aggregate,
    Q: EventHandler<A> + ?Sized,
    T: Deref<Target = Q> + Send + Sync,
{
    /// Deref call to [`EventHandler::handle`].
    fn handle(&self, event: &StoreEvent<A::Event>) {
        self.deref().handle(event);
    }

    /// Deref call to [`EventHandler::name`].
    fn name(&self) -> &'static str {
        self.deref().name()
    }
}
