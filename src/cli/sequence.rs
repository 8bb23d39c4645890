use std::sync::Arc;

use anyhow::{Context, Result};
use cdp_target::{CdpSession, ExpressionSettle};
use clap::Args;
use tracing::info;
use vizdriver_sequencer::ports::SettlePort;
use vizdriver_sequencer::{ActionRequest, Order, SequenceReport, Sequencer, SequencerBuilder};

use crate::cli::context::CliContext;

#[derive(Args, Clone, Debug)]
pub struct InsertArgs {
    /// Number of values to insert (1..=COUNT)
    pub count: u32,

    /// Insert COUNT..=1 instead of 1..=COUNT
    #[arg(long)]
    pub descending: bool,
}

#[derive(Args, Clone, Debug)]
pub struct DeleteArgs {
    /// Values to delete, applied in the given order (space or comma separated)
    #[arg(
        required = true,
        value_delimiter = ',',
        allow_negative_numbers = true,
        num_args = 1..
    )]
    pub values: Vec<i64>,
}

pub async fn cmd_insert(args: InsertArgs, ctx: &CliContext) -> Result<()> {
    let order = if args.descending {
        Order::Descending
    } else {
        Order::Ascending
    };
    run_request(ActionRequest::insert_range(args.count, order), ctx).await
}

pub async fn cmd_delete(args: DeleteArgs, ctx: &CliContext) -> Result<()> {
    run_request(ActionRequest::delete(args.values), ctx).await
}

async fn run_request(request: ActionRequest, ctx: &CliContext) -> Result<()> {
    let config = ctx.config();
    let session = CdpSession::start(&config.browser).await?;

    let outcome = drive(&session, request, ctx).await;
    session.shutdown().await;

    let report = outcome?;
    info!(
        run = %report.run_id,
        kind = %report.kind,
        applied = report.applied,
        latency_ms = report.latency_ms as u64,
        "sequence finished"
    );
    println!("{} {} value(s) in {}ms", report.kind, report.applied, report.latency_ms);
    Ok(())
}

async fn drive(
    session: &CdpSession,
    request: ActionRequest,
    ctx: &CliContext,
) -> Result<SequenceReport> {
    let config = ctx.config();
    let target = session
        .open(&config.target.url, config.target.layout.clone())
        .await?;

    let mut builder =
        SequencerBuilder::new(config.sequencer.clone()).with_target(Arc::new(target.clone()));
    if let Some(expression) = &config.target.settle_expression {
        let settle: Arc<dyn SettlePort> = Arc::new(ExpressionSettle::for_target(
            &target,
            expression.clone(),
            &config.sequencer,
        ));
        builder = builder.with_settle(settle);
    }
    let sequencer = builder.build()?;

    let kind = request.kind;
    sequencer
        .run(request)
        .await
        .with_context(|| format!("{kind} sequence against {} failed", config.target.url))
}
