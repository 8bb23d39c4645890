use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::Page;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};
use vizdriver_sequencer::ports::SettlePort;
use vizdriver_sequencer::{ActionKind, SequencerError, SequencerPolicy};

use crate::script;
use crate::target::CdpTarget;

/// Waits for a page expression to turn truthy after each activation.
///
/// The policy's settle delay still runs before the activation when non-zero.
#[derive(Clone)]
pub struct ExpressionSettle {
    page: Page,
    expression: String,
    pre_delay: Duration,
    timeout: Duration,
    poll: Duration,
}

impl ExpressionSettle {
    pub fn new(page: Page, expression: impl Into<String>, policy: &SequencerPolicy) -> Self {
        Self {
            page,
            expression: expression.into(),
            pre_delay: policy.settle_delay(),
            timeout: policy.settle_timeout(),
            poll: policy.settle_poll(),
        }
    }

    pub fn for_target(
        target: &CdpTarget,
        expression: impl Into<String>,
        policy: &SequencerPolicy,
    ) -> Self {
        Self::new(target.page().clone(), expression, policy)
    }
}

#[async_trait]
impl SettlePort for ExpressionSettle {
    async fn before_trigger(&self, _kind: ActionKind) -> Result<(), SequencerError> {
        if !self.pre_delay.is_zero() {
            sleep(self.pre_delay).await;
        }
        Ok(())
    }

    async fn after_trigger(&self, kind: ActionKind) -> Result<(), SequencerError> {
        let check = script::settle_probe(&self.expression);
        let page = &self.page;
        debug!(%kind, expression = %self.expression, "waiting for page to settle");
        wait_until(kind, self.timeout, self.poll, move || {
            CdpTarget::eval_bool(page, check.clone())
        })
        .await
    }
}

/// Polls `ready` every `poll` until it yields true or `timeout` elapses.
///
/// The first check runs one poll interval after the call.
async fn wait_until<F, Fut>(
    kind: ActionKind,
    timeout: Duration,
    poll: Duration,
    mut ready: F,
) -> Result<(), SequencerError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, SequencerError>>,
{
    let start = Instant::now();
    loop {
        sleep(poll).await;
        if ready().await? {
            debug!(%kind, waited_ms = start.elapsed().as_millis() as u64, "page settled");
            return Ok(());
        }
        if start.elapsed() >= timeout {
            let waited_ms = start.elapsed().as_millis() as u64;
            warn!(%kind, waited_ms, "settle wait timed out");
            return Err(SequencerError::SettleTimeout { kind, waited_ms });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const TIMEOUT: Duration = Duration::from_millis(1_000);
    const POLL: Duration = Duration::from_millis(100);

    #[tokio::test(start_paused = true)]
    async fn first_check_waits_one_poll_interval() {
        let start = Instant::now();
        let checked_at = Cell::new(None);
        wait_until(ActionKind::Insert, TIMEOUT, POLL, || {
            checked_at.set(Some(start.elapsed()));
            async { Ok(true) }
        })
        .await
        .unwrap();

        let checked_at = checked_at.get().unwrap();
        assert!(checked_at >= POLL);
        assert!(checked_at < POLL + Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn returns_once_the_page_reports_ready() {
        let calls = Cell::new(0u32);
        let start = Instant::now();
        wait_until(ActionKind::Delete, TIMEOUT, POLL, || {
            calls.set(calls.get() + 1);
            let ready = calls.get() == 3;
            async move { Ok(ready) }
        })
        .await
        .unwrap();

        assert_eq!(calls.get(), 3);
        let waited = start.elapsed();
        assert!(waited >= POLL * 3);
        assert!(waited < POLL * 3 + Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn never_ready_times_out() {
        let err = wait_until(ActionKind::Insert, TIMEOUT, POLL, || async { Ok(false) })
            .await
            .unwrap_err();

        match err {
            SequencerError::SettleTimeout { kind, waited_ms } => {
                assert_eq!(kind, ActionKind::Insert);
                assert!(waited_ms >= 1_000);
                assert!(waited_ms < 1_200);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn check_errors_abort_the_wait() {
        let err = wait_until(ActionKind::Delete, TIMEOUT, POLL, || async {
            Err(SequencerError::target("page crashed"))
        })
        .await
        .unwrap_err();

        assert_eq!(err, SequencerError::target("page crashed"));
    }
}
