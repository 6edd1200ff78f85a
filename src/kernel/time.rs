use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Logical delay, relative to the previous emission of the same turn.
/// The kernel never waits on it; the adapter decides how to honour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Delay {
    pub millis: u64,
}

impl Delay {
    pub const ZERO: Delay = Delay { millis: 0 };

    pub fn from_millis(millis: u64) -> Self {
        Delay { millis }
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.millis)
    }

    pub fn is_zero(&self) -> bool {
        self.millis == 0
    }
}
