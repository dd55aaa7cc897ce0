use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum TestCommand {
    Single,
    Multi,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestEvent {
    pub add: i32,
}

#[derive(Debug)]
pub struct TestError;

impl Display for TestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "test error")
    }
}

impl std::error::Error for TestError {}
