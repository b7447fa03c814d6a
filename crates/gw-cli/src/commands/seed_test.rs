use super::*;
use async_trait::async_trait;
use gw_transport::{TransportError, TransportResult};
use std::sync::Mutex;

/// Scripted outcomes keyed by record name; records the rows it saw.
struct MockRowTransport {
    conflicts: Vec<&'static str>,
    failures: Vec<&'static str>,
    seen: Mutex<Vec<String>>,
}

impl MockRowTransport {
    fn new(conflicts: Vec<&'static str>, failures: Vec<&'static str>) -> Self {
        Self {
            conflicts,
            failures,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl RowTransport for MockRowTransport {
    async fn insert_row(
        &self,
        _table: &str,
        body: &serde_json::Value,
    ) -> TransportResult<RowOutcome> {
        let name = body["name"].as_str().unwrap_or_default().to_string();
        self.seen.lock().unwrap().push(name.clone());
        if self.failures.iter().any(|f| *f == name) {
            Err(TransportError::Server {
                status: 500,
                body: "internal error".to_string(),
            })
        } else if self.conflicts.iter().any(|c| *c == name) {
            Ok(RowOutcome::AlreadyExists)
        } else {
            Ok(RowOutcome::Inserted)
        }
    }
}

fn rows(names: &[&'static str]) -> Vec<SeedRow> {
    names
        .iter()
        .copied()
        .map(|name| SeedRow {
            name,
            body: serde_json::json!({ "name": name }),
        })
        .collect()
}

#[tokio::test]
async fn test_conflict_counts_as_existing_and_continues() {
    let transport = MockRowTransport::new(vec!["Dice"], vec![]);
    let batch = rows(&["Dice", "Hired", "RemoteOK"]);

    let counters = seed_rows(&transport, "job_boards", &batch, false).await;

    assert_eq!(counters.inserted, 2);
    assert_eq!(counters.existing, 1);
    assert_eq!(counters.failed, 0);
    assert_eq!(transport.seen().len(), 3);
}

#[tokio::test]
async fn test_best_effort_continues_past_failure() {
    let transport = MockRowTransport::new(vec![], vec!["Hired"]);
    let batch = rows(&["Dice", "Hired", "RemoteOK"]);

    let counters = seed_rows(&transport, "job_boards", &batch, false).await;

    assert_eq!(counters.inserted, 2);
    assert_eq!(counters.failed, 1);
    assert_eq!(transport.seen(), vec!["Dice", "Hired", "RemoteOK"]);
}

#[tokio::test]
async fn test_fail_fast_stops_at_first_failure() {
    let transport = MockRowTransport::new(vec![], vec!["Dice"]);
    let batch = rows(&["Dice", "Hired", "RemoteOK"]);

    let counters = seed_rows(&transport, "job_boards", &batch, true).await;

    assert_eq!(counters.inserted, 0);
    assert_eq!(counters.failed, 1);
    assert_eq!(transport.seen(), vec!["Dice"]);
}

#[test]
fn test_parse_tables_default_is_all() {
    let datasets = parse_tables(None).unwrap();
    assert_eq!(datasets, Dataset::ALL.to_vec());
}

#[test]
fn test_parse_tables_filter() {
    let datasets = parse_tables(Some("job_roles")).unwrap();
    assert_eq!(datasets, vec![Dataset::JobRoles]);

    let datasets = parse_tables(Some("job_boards, job_roles")).unwrap();
    assert_eq!(datasets, vec![Dataset::JobBoards, Dataset::JobRoles]);
}

#[test]
fn test_parse_tables_unknown() {
    let err = parse_tables(Some("job_titles")).unwrap_err();
    assert!(err.to_string().contains("[C004]"));
}
