use std::sync::{Arc, Mutex};

use bank_cards::{EventHandler, SequenceNumber, StoreEvent};

use crate::aggregate::{TestAggregate, TestEvent};

#[derive(Clone)]
pub struct TestEventHandler {
    pub total: Arc<Mutex<i32>>,
    pub sequence_numbers: Arc<Mutex<Vec<SequenceNumber>>>,
}

impl TestEventHandler {
    pub fn new() -> Self {
        Self {
            total: Arc::new(Mutex::new(0)),
            sequence_numbers: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl EventHandler<TestAggregate> for TestEventHandler {
    fn handle(&self, event: &StoreEvent<TestEvent>) {
        let mut guard = self.total.lock().unwrap();
        *guard += event.payload.add;
        self.sequence_numbers.lock().unwrap().push(event.sequence_number);
    }
}
