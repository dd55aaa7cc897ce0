use std::sync::Arc;

use bank_cards::{AggregateManager, AggregateState, StoreEvent};

use crate::aggregate::{TestAggregate, TestAggregateState, TestCommand, TestEvent, TestEventHandler};

#[test]
fn handle_command_test() {
    let manager: AggregateManager<TestAggregate> = AggregateManager::new(AggregateState::with_id("test"));

    manager.handle_command(TestCommand::Single).unwrap();
    let aggregate_state: AggregateState<TestAggregateState> = manager.load();
    assert_eq!(aggregate_state.inner().count, 2);
    assert_eq!(aggregate_state.sequence_number(), &1);

    manager.handle_command(TestCommand::Single).unwrap();
    let aggregate_state: AggregateState<TestAggregateState> = manager.load();
    assert_eq!(aggregate_state.inner().count, 3);
    assert_eq!(aggregate_state.sequence_number(), &2);

    manager.handle_command(TestCommand::Multi).unwrap();
    let aggregate_state: AggregateState<TestAggregateState> = manager.load();
    assert_eq!(aggregate_state.inner().count, 5);
    assert_eq!(aggregate_state.sequence_number(), &4);
}

#[test]
fn store_events_carry_metadata_test() {
    let manager: AggregateManager<TestAggregate> = AggregateManager::new(AggregateState::with_id("meta"));
    manager.handle_command(TestCommand::Single).unwrap();

    let store_events: Vec<StoreEvent<TestEvent>> = manager.handle_command(TestCommand::Multi).unwrap();

    assert_eq!(store_events.len(), 2);
    assert_eq!(store_events[0].sequence_number(), &2);
    assert_eq!(store_events[1].sequence_number(), &3);
    assert!(store_events.iter().all(|event| event.aggregate_id.as_str() == "meta"));
    assert_ne!(store_events[0].id, store_events[1].id);
    assert_eq!(store_events[0].occurred_on, store_events[1].occurred_on);
    assert_eq!(store_events[0].payload(), &TestEvent { add: 1 });
}

#[test]
fn rejected_command_leaves_state_untouched_test() {
    let event_handler = TestEventHandler::new();
    let manager: AggregateManager<TestAggregate> =
        AggregateManager::new(AggregateState::with_id("fail")).with_event_handler(event_handler.clone());

    assert!(manager.handle_command(TestCommand::Fail).is_err());

    let aggregate_state: AggregateState<TestAggregateState> = manager.load();
    assert_eq!(aggregate_state.inner().count, 1);
    assert_eq!(aggregate_state.sequence_number(), &0);
    assert_eq!(*event_handler.total.lock().unwrap(), 0);
}

#[test]
fn event_handlers_see_every_event_test() {
    let event_handler = TestEventHandler::new();
    let shared_handler = Arc::new(TestEventHandler::new());
    let manager: AggregateManager<TestAggregate> = AggregateManager::new(AggregateState::with_id("handlers"))
        .with_event_handler(event_handler.clone())
        .with_event_handler(shared_handler.clone());

    manager.handle_command(TestCommand::Multi).unwrap();
    manager.handle_command(TestCommand::Single).unwrap();

    assert_eq!(*event_handler.total.lock().unwrap(), 3);
    assert_eq!(*event_handler.sequence_numbers.lock().unwrap(), vec![1, 2, 3]);
    assert_eq!(*shared_handler.total.lock().unwrap(), 3);
}

#[test]
fn concurrent_commands_are_serialized_test() {
    let event_handler = TestEventHandler::new();
    let manager: AggregateManager<TestAggregate> =
        AggregateManager::new(AggregateState::with_id("threads")).with_event_handler(event_handler.clone());

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..50 {
                    manager.handle_command(TestCommand::Single).unwrap();
                }
            });
        }
    });

    let aggregate_state: AggregateState<TestAggregateState> = manager.load();
    assert_eq!(aggregate_state.inner().count, 401);
    assert_eq!(aggregate_state.sequence_number(), &400);

    let mut sequence_numbers = event_handler.sequence_numbers.lock().unwrap().clone();
    sequence_numbers.sort_unstable();
    assert_eq!(sequence_numbers, (1..=400).collect::<Vec<_>>());
}
