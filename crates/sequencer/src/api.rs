use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::SequencerError;
use crate::model::{ActionRequest, Order, RunId, SequenceReport};
use crate::policy::SequencerPolicy;
use crate::ports::{SettlePort, TargetPort};
use crate::runner::{execute, RuntimeDeps};
use crate::settle::FixedDelay;

#[async_trait]
pub trait Sequencer: Send + Sync {
    async fn run(&self, request: ActionRequest) -> Result<SequenceReport, SequencerError>;

    /// Inserts `1..=n` (or `n..=1` when `ascending` is false).
    async fn run_insert_sequence(
        &self,
        n: u32,
        ascending: bool,
    ) -> Result<SequenceReport, SequencerError> {
        self.run(ActionRequest::insert_range(n, Order::from(ascending)))
            .await
    }

    /// Deletes `values` in the given order.
    async fn run_delete_sequence(
        &self,
        values: Vec<i64>,
    ) -> Result<SequenceReport, SequencerError> {
        self.run(ActionRequest::delete(values)).await
    }
}

pub struct SequencerBuilder {
    policy: SequencerPolicy,
    target: Option<Arc<dyn TargetPort>>,
    settle: Option<Arc<dyn SettlePort>>,
}

impl SequencerBuilder {
    pub fn new(policy: SequencerPolicy) -> Self {
        Self {
            policy,
            target: None,
            settle: None,
        }
    }

    pub fn with_target(mut self, port: Arc<dyn TargetPort>) -> Self {
        self.target = Some(port);
        self
    }

    pub fn with_settle(mut self, port: Arc<dyn SettlePort>) -> Self {
        self.settle = Some(port);
        self
    }

    pub fn build(self) -> Result<Arc<dyn Sequencer>, SequencerError> {
        let target = self
            .target
            .ok_or_else(|| SequencerError::Misconfigured("target port is required".into()))?;
        let settle = self
            .settle
            .unwrap_or_else(|| Arc::new(FixedDelay::from_policy(&self.policy)));
        Ok(Arc::new(SequencerImpl {
            policy: self.policy,
            target,
            settle,
        }))
    }
}

pub struct SequencerImpl {
    policy: SequencerPolicy,
    target: Arc<dyn TargetPort>,
    settle: Arc<dyn SettlePort>,
}

#[async_trait]
impl Sequencer for SequencerImpl {
    async fn run(&self, request: ActionRequest) -> Result<SequenceReport, SequencerError> {
        let runtime = RuntimeDeps {
            target: self.target.as_ref(),
            settle: self.settle.as_ref(),
            policy: &self.policy,
        };
        execute(RunId::new(), request, runtime).await
    }
}
