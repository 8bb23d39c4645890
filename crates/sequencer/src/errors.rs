use thiserror::Error;

use crate::model::{ActionKind, TargetElement};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequencerError {
    #[error("target element not found: {0}")]
    TargetNotFound(TargetElement),
    #[error("target i/o failure: {0}")]
    Target(String),
    #[error("{kind} did not settle within {waited_ms}ms")]
    SettleTimeout { kind: ActionKind, waited_ms: u64 },
    #[error("request has {requested} steps, policy allows {limit}")]
    TooManySteps { requested: usize, limit: usize },
    #[error("sequencer misconfigured: {0}")]
    Misconfigured(String),
}

impl SequencerError {
    pub fn target(message: impl Into<String>) -> Self {
        SequencerError::Target(message.into())
    }

    /// Short label used in logs.
    pub fn kind_label(&self) -> &'static str {
        match self {
            SequencerError::TargetNotFound(_) => "target_not_found",
            SequencerError::Target(_) => "target_io",
            SequencerError::SettleTimeout { .. } => "settle_timeout",
            SequencerError::TooManySteps { .. } => "too_many_steps",
            SequencerError::Misconfigured(_) => "misconfigured",
        }
    }
}
