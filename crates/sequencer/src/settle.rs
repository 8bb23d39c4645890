use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::errors::SequencerError;
use crate::model::ActionKind;
use crate::policy::SequencerPolicy;
use crate::ports::SettlePort;

/// Sleeps a fixed interval before each activation. Used when the target
/// exposes no completion signal.
#[derive(Clone, Debug)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_policy(policy: &SequencerPolicy) -> Self {
        Self::new(policy.settle_delay())
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::from_policy(&SequencerPolicy::default())
    }
}

#[async_trait]
impl SettlePort for FixedDelay {
    async fn before_trigger(&self, _kind: ActionKind) -> Result<(), SequencerError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        Ok(())
    }
}

/// No pacing at all.
#[derive(Clone, Debug, Default)]
pub struct NullSettle;

#[async_trait]
impl SettlePort for NullSettle {}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn fixed_delay_sleeps_before_trigger_only() {
        let settle = FixedDelay::default();
        let start = Instant::now();
        settle.before_trigger(ActionKind::Insert).await.unwrap();
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(500));
        assert!(waited < Duration::from_millis(600));

        let start = Instant::now();
        settle.after_trigger(ActionKind::Insert).await.unwrap();
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
