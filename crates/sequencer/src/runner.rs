use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use crate::errors::SequencerError;
use crate::model::{ActionKind, ActionRequest, RunId, SequenceReport};
use crate::policy::SequencerPolicy;
use crate::ports::{SettlePort, TargetPort};

pub struct RuntimeDeps<'a> {
    pub target: &'a dyn TargetPort,
    pub settle: &'a dyn SettlePort,
    pub policy: &'a SequencerPolicy,
}

/// Applies every value of `request` in order: write, settle, activate, settle.
///
/// The first failure aborts the run; values after it are left unapplied.
#[instrument(skip_all, fields(run = %run_id, kind = %request.kind, steps = request.len()))]
pub async fn execute(
    run_id: RunId,
    request: ActionRequest,
    deps: RuntimeDeps<'_>,
) -> Result<SequenceReport, SequencerError> {
    if let Some(limit) = deps.policy.max_steps {
        if request.len() > limit {
            return Err(SequencerError::TooManySteps {
                requested: request.len(),
                limit,
            });
        }
    }

    let kind = request.kind;
    let mut report = SequenceReport::new(run_id, kind, Instant::now());

    for (step, value) in request.values.iter().enumerate() {
        let text = value.to_string();
        debug!(step, value = %text, "writing value");
        let result = apply_step(&deps, kind, &text).await;
        if let Err(err) = result {
            warn!(step, value = %text, error = %err, error_kind = err.kind_label(), "sequence aborted");
            return Err(err);
        }
        report.applied += 1;
    }

    let report = report.finish(Instant::now());
    info!(
        applied = report.applied,
        latency_ms = report.latency_ms as u64,
        "sequence completed"
    );
    Ok(report)
}

async fn apply_step(
    deps: &RuntimeDeps<'_>,
    kind: ActionKind,
    text: &str,
) -> Result<(), SequencerError> {
    deps.target.write_field(kind, text).await?;
    deps.settle.before_trigger(kind).await?;
    deps.target.activate(kind).await?;
    deps.settle.after_trigger(kind).await
}
