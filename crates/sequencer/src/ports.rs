use async_trait::async_trait;

use crate::errors::SequencerError;
use crate::model::ActionKind;

/// Handle onto the externally owned document being driven.
///
/// Implementations resolve the kind-specific field or control on every call
/// and report `SequencerError::TargetNotFound` when it is absent.
#[async_trait]
pub trait TargetPort: Send + Sync {
    /// Replaces the text of the input field used by `kind`.
    async fn write_field(&self, kind: ActionKind, text: &str) -> Result<(), SequencerError>;

    /// Activates the trigger control used by `kind`.
    async fn activate(&self, kind: ActionKind) -> Result<(), SequencerError>;
}

/// Pacing between the write and the activation of a step, and between steps.
#[async_trait]
pub trait SettlePort: Send + Sync {
    async fn before_trigger(&self, _kind: ActionKind) -> Result<(), SequencerError> {
        Ok(())
    }

    async fn after_trigger(&self, _kind: ActionKind) -> Result<(), SequencerError> {
        Ok(())
    }
}
