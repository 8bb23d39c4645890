use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerPolicy {
    /// Pause between writing a value and activating its control.
    pub settle_delay_ms: u64,
    pub settle_timeout_ms: u64,
    pub settle_poll_ms: u64,
    /// Upper bound on values per request; unbounded when unset.
    pub max_steps: Option<usize>,
}

impl SequencerPolicy {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn settle_timeout(&self) -> Duration {
        Duration::from_millis(self.settle_timeout_ms)
    }

    pub fn settle_poll(&self) -> Duration {
        Duration::from_millis(self.settle_poll_ms.max(1))
    }
}

impl Default for SequencerPolicy {
    fn default() -> Self {
        Self {
            settle_delay_ms: 500,
            settle_timeout_ms: 10_000,
            settle_poll_ms: 100,
            max_steps: None,
        }
    }
}
