use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub type SequenceNumber = i32;

/// Opaque identifier of a card, usually its printed number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CardNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CardNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}
