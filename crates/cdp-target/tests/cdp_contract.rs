//! Contract tests that drive a real Chromium binary against a local fixture
//! page. Ignored by default; set VIZDRIVER_CDP_CONTRACT=1 to run them.

use std::env;
use std::sync::Arc;

use cdp_target::{CdpConfig, CdpSession, CdpTarget, ExpressionSettle, TargetLayout};
use vizdriver_sequencer::{
    NullSettle, Sequencer, SequencerBuilder, SequencerError, SequencerPolicy, TargetElement,
};

const FIXTURE: &str = "data:text/html,<html><body>\
<input type='text'><input type='text'><input type='text'>\
<button name='Insert' onclick=\"window.ops.push('i' + document.getElementsByTagName('input')[0].value)\">Insert</button>\
<button name='Delete' onclick=\"window.ops.push('d' + document.getElementsByTagName('input')[2].value)\">Delete</button>\
<script>window.ops = [];</script>\
</body></html>";

fn contract_enabled() -> bool {
    env::var("VIZDRIVER_CDP_CONTRACT")
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

async fn recorded_ops(target: &CdpTarget) -> Vec<String> {
    target
        .page()
        .evaluate("window.ops")
        .await
        .expect("evaluate ops")
        .into_value()
        .expect("ops array")
}

fn fast_policy() -> SequencerPolicy {
    SequencerPolicy {
        settle_delay_ms: 10,
        ..SequencerPolicy::default()
    }
}

#[tokio::test]
#[ignore = "requires Chrome/Chromium; set VIZDRIVER_CDP_CONTRACT=1"]
async fn contract_insert_then_delete() {
    if !contract_enabled() {
        eprintln!("skipping CDP contract test (VIZDRIVER_CDP_CONTRACT not enabled)");
        return;
    }

    let session = CdpSession::start(&CdpConfig::default())
        .await
        .expect("browser starts");
    let target = session
        .open(FIXTURE, TargetLayout::default())
        .await
        .expect("fixture opens");

    let sequencer = SequencerBuilder::new(fast_policy())
        .with_target(Arc::new(target.clone()))
        .build()
        .expect("sequencer builds");

    sequencer.run_insert_sequence(3, false).await.expect("insert");
    sequencer
        .run_delete_sequence(vec![10, 11, 13, 12])
        .await
        .expect("delete");

    assert_eq!(
        recorded_ops(&target).await,
        vec!["i3", "i2", "i1", "d10", "d11", "d13", "d12"]
    );
    session.shutdown().await;
}

#[tokio::test]
#[ignore = "requires Chrome/Chromium; set VIZDRIVER_CDP_CONTRACT=1"]
async fn contract_missing_control_is_target_not_found() {
    if !contract_enabled() {
        eprintln!("skipping CDP contract test (VIZDRIVER_CDP_CONTRACT not enabled)");
        return;
    }

    let session = CdpSession::start(&CdpConfig::default())
        .await
        .expect("browser starts");
    let layout = TargetLayout {
        insert_control: "Add".into(),
        ..TargetLayout::default()
    };
    let target = session.open(FIXTURE, layout).await.expect("fixture opens");

    let sequencer = SequencerBuilder::new(fast_policy())
        .with_target(Arc::new(target.clone()))
        .with_settle(Arc::new(NullSettle))
        .build()
        .expect("sequencer builds");

    let err = sequencer.run_insert_sequence(2, true).await.unwrap_err();
    assert_eq!(
        err,
        SequencerError::TargetNotFound(TargetElement::InsertTrigger)
    );
    assert!(recorded_ops(&target).await.is_empty());
    session.shutdown().await;
}

#[tokio::test]
#[ignore = "requires Chrome/Chromium; set VIZDRIVER_CDP_CONTRACT=1"]
async fn contract_expression_settle_waits_for_signal() {
    if !contract_enabled() {
        eprintln!("skipping CDP contract test (VIZDRIVER_CDP_CONTRACT not enabled)");
        return;
    }

    let session = CdpSession::start(&CdpConfig::default())
        .await
        .expect("browser starts");
    let target = session
        .open(FIXTURE, TargetLayout::default())
        .await
        .expect("fixture opens");

    let policy = SequencerPolicy {
        settle_delay_ms: 0,
        settle_timeout_ms: 300,
        ..SequencerPolicy::default()
    };
    let settle = ExpressionSettle::for_target(&target, "window.ops.length > 100", &policy);
    let sequencer = SequencerBuilder::new(policy)
        .with_target(Arc::new(target.clone()))
        .with_settle(Arc::new(settle))
        .build()
        .expect("sequencer builds");

    let err = sequencer.run_insert_sequence(2, true).await.unwrap_err();
    assert!(matches!(err, SequencerError::SettleTimeout { .. }));
    assert_eq!(recorded_ops(&target).await, vec!["i1"]);
    session.shutdown().await;
}
