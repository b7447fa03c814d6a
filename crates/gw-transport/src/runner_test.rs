use super::*;
use crate::error::{TransportError, TransportResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Records executed SQL; fails any statement containing "boom".
struct RecordingTransport {
    executed: Mutex<Vec<String>>,
    pings: AtomicUsize,
}

impl RecordingTransport {
    fn new() -> Self {
        Self {
            executed: Mutex::new(Vec::new()),
            pings: AtomicUsize::new(0),
        }
    }

    fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl SqlTransport for RecordingTransport {
    async fn execute_sql(&self, sql: &str) -> TransportResult<()> {
        self.executed.lock().unwrap().push(sql.to_string());
        if sql.contains("boom") {
            Err(TransportError::Server {
                status: 400,
                body: "syntax error".to_string(),
            })
        } else {
            Ok(())
        }
    }

    async fn ping(&self) -> TransportResult<()> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "recording"
    }
}

fn step(id: u32, sql: &str) -> MigrationStep {
    MigrationStep {
        id,
        label: "test step",
        sql: sql.to_string(),
    }
}

#[tokio::test]
async fn test_all_steps_succeed() {
    let transport = RecordingTransport::new();
    let steps = vec![step(17, "ALTER TABLE a;"), step(18, "INSERT INTO b;")];

    let report = apply_steps(&transport, &steps, &ApplyOptions::default()).await;

    assert!(report.succeeded());
    assert_eq!(report.applied_count(), 2);
    assert_eq!(report.failed_count(), 0);
    assert_eq!(transport.executed().len(), 2);
}

#[tokio::test]
async fn test_steps_run_in_order() {
    let transport = RecordingTransport::new();
    let steps = vec![step(17, "first"), step(18, "second"), step(19, "third")];

    apply_steps(&transport, &steps, &ApplyOptions::default()).await;

    assert_eq!(transport.executed(), vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_fail_fast_stops_at_first_failure() {
    let transport = RecordingTransport::new();
    let steps = vec![step(17, "ok"), step(18, "boom"), step(19, "never")];

    let options = ApplyOptions {
        fail_fast: true,
        settle: None,
    };
    let report = apply_steps(&transport, &steps, &options).await;

    assert!(!report.succeeded());
    assert_eq!(transport.executed(), vec!["ok", "boom"]);
    assert_eq!(report.steps[0].state, StepState::Succeeded);
    assert_eq!(report.steps[1].state, StepState::Failed);
    assert!(report.steps[1]
        .error
        .as_deref()
        .unwrap()
        .contains("syntax error"));
    assert_eq!(report.steps[2].state, StepState::Pending);
}

#[tokio::test]
async fn test_best_effort_continues_past_failure() {
    let transport = RecordingTransport::new();
    let steps = vec![step(17, "ok"), step(18, "boom"), step(19, "also ok")];

    let options = ApplyOptions {
        fail_fast: false,
        settle: None,
    };
    let report = apply_steps(&transport, &steps, &options).await;

    assert!(!report.succeeded());
    assert_eq!(transport.executed().len(), 3);
    assert_eq!(report.applied_count(), 2);
    assert_eq!(report.failed_count(), 1);
}

#[tokio::test]
async fn test_settle_polls_between_steps_only() {
    let transport = RecordingTransport::new();
    let steps = vec![step(17, "a"), step(18, "b")];

    let options = ApplyOptions {
        fail_fast: true,
        settle: Some(SettlePolicy {
            attempts: 3,
            delay: std::time::Duration::from_millis(1),
        }),
    };
    apply_steps(&transport, &steps, &options).await;

    // One poll after step 017; none after the final step.
    assert_eq!(transport.pings.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_step_report_tag() {
    let transport = RecordingTransport::new();
    let steps = vec![step(17, "a")];
    let report = apply_steps(&transport, &steps, &ApplyOptions::default()).await;
    assert_eq!(report.steps[0].tag(), "017");
}
