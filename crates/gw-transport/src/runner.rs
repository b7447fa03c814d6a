//! Sequential migration runner.
//!
//! Applies steps strictly in order. Each step moves Pending → Running →
//! Succeeded | Failed; with fail-fast the first failure stops the run and
//! the remaining steps stay Pending. Running is transient and only shows up
//! in the debug log.

use crate::readiness::wait_until_ready;
use crate::traits::SqlTransport;
use gw_core::step::MigrationStep;
use std::time::Duration;

/// Readiness poll applied between consecutive steps, replacing a fixed
/// sleep.
#[derive(Debug, Clone)]
pub struct SettlePolicy {
    pub attempts: u32,
    pub delay: Duration,
}

/// Options controlling a migration run.
#[derive(Debug, Clone)]
pub struct ApplyOptions {
    /// Abort the run at the first failed step.
    pub fail_fast: bool,
    /// Optional readiness poll between consecutive steps.
    pub settle: Option<SettlePolicy>,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            fail_fast: true,
            settle: None,
        }
    }
}

/// Final state of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// Not attempted because the run aborted earlier.
    Pending,
    Succeeded,
    Failed,
}

/// Result of one step.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub id: u32,
    pub label: String,
    pub state: StepState,
    pub error: Option<String>,
}

impl StepReport {
    /// Zero-padded id, matching [`MigrationStep::tag`].
    pub fn tag(&self) -> String {
        format!("{:03}", self.id)
    }
}

/// Result of a whole run.
#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
    pub steps: Vec<StepReport>,
}

impl ApplyReport {
    /// True when every step was applied successfully.
    pub fn succeeded(&self) -> bool {
        self.steps.iter().all(|s| s.state == StepState::Succeeded)
    }

    pub fn failed_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.state == StepState::Failed)
            .count()
    }

    pub fn applied_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.state == StepState::Succeeded)
            .count()
    }
}

/// Apply `steps` through `transport`, strictly sequentially.
///
/// Steps must be supplied in ascending dependency order; the registry in
/// gw-core guarantees this for the built-in steps.
pub async fn apply_steps(
    transport: &dyn SqlTransport,
    steps: &[MigrationStep],
    options: &ApplyOptions,
) -> ApplyReport {
    let mut report = ApplyReport {
        steps: Vec::with_capacity(steps.len()),
    };
    let mut aborted = false;

    for (index, step) in steps.iter().enumerate() {
        if aborted {
            report.steps.push(StepReport {
                id: step.id,
                label: step.label.to_string(),
                state: StepState::Pending,
                error: None,
            });
            continue;
        }

        log::debug!(
            "running migration step {} via {} transport",
            step.tag(),
            transport.kind()
        );
        match transport.execute_sql(&step.sql).await {
            Ok(()) => {
                report.steps.push(StepReport {
                    id: step.id,
                    label: step.label.to_string(),
                    state: StepState::Succeeded,
                    error: None,
                });

                // Let the endpoint settle before the next step touches the
                // schema this one just changed.
                if index + 1 < steps.len() {
                    if let Some(settle) = &options.settle {
                        if let Err(e) =
                            wait_until_ready(transport, settle.attempts, settle.delay).await
                        {
                            log::warn!("transport not ready after step {}: {e}", step.tag());
                        }
                    }
                }
            }
            Err(e) => {
                report.steps.push(StepReport {
                    id: step.id,
                    label: step.label.to_string(),
                    state: StepState::Failed,
                    error: Some(e.to_string()),
                });
                if options.fail_fast {
                    aborted = true;
                }
            }
        }
    }

    report
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
