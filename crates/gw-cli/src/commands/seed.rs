//! Seed command implementation
//!
//! Direct-row path: one POST per record. Best-effort by default — a failed
//! record is reported and skipped so the rest of the batch still loads, and
//! HTTP 409 just means the row is already there.

use anyhow::{Context, Result};
use gw_core::dataset::{Dataset, SeedRow};
use gw_transport::{RestTransport, RowOutcome, RowTransport};

use crate::cli::{GlobalArgs, SeedArgs};
use crate::commands::common::{load_config, require_service_key, ExitCode};

/// Per-dataset seeding counters.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SeedCounters {
    pub(crate) inserted: usize,
    pub(crate) existing: usize,
    pub(crate) failed: usize,
}

impl SeedCounters {
    fn absorb(&mut self, other: SeedCounters) {
        self.inserted += other.inserted;
        self.existing += other.existing;
        self.failed += other.failed;
    }
}

/// Insert `rows` into `table` one at a time.
///
/// With `fail_fast`, returns after the first failed record; otherwise the
/// failure is reported and the loop moves on.
pub(crate) async fn seed_rows(
    transport: &dyn RowTransport,
    table: &str,
    rows: &[SeedRow],
    fail_fast: bool,
) -> SeedCounters {
    let mut counters = SeedCounters::default();
    for row in rows {
        match transport.insert_row(table, &row.body).await {
            Ok(RowOutcome::Inserted) => {
                counters.inserted += 1;
                println!("  ✓ {}", row.name);
            }
            Ok(RowOutcome::AlreadyExists) => {
                counters.existing += 1;
                println!("  ⚠ {} (already exists)", row.name);
            }
            Err(e) => {
                counters.failed += 1;
                println!("  ✗ {} - {}", row.name, e);
                if fail_fast {
                    break;
                }
            }
        }
    }
    counters
}

/// Resolve the `--tables` filter to datasets, defaulting to all of them.
fn parse_tables(filter: Option<&str>) -> Result<Vec<Dataset>> {
    match filter {
        None => Ok(Dataset::ALL.to_vec()),
        Some(list) => list
            .split(',')
            .map(|table| Dataset::from_table(table.trim()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into),
    }
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, global: &GlobalArgs) -> Result<()> {
    let datasets = parse_tables(args.tables.as_deref())?;

    let config = load_config(global)?;
    let key = require_service_key(global)?;
    let transport = RestTransport::new(&config.endpoint.base_url, key)
        .context("Failed to build REST transport")?;

    if global.verbose {
        eprintln!(
            "[verbose] Seeding {} datasets against {}",
            datasets.len(),
            config.endpoint.base_url
        );
    }

    let mut totals = SeedCounters::default();
    for dataset in &datasets {
        let rows = dataset.rows().context("Failed to serialize seed rows")?;
        println!("Seeding {} ({} records)...", dataset.table(), rows.len());

        let counters = seed_rows(&transport, dataset.table(), &rows, args.fail_fast).await;
        totals.absorb(counters);
        println!();

        if args.fail_fast && counters.failed > 0 {
            println!("Stopping due to --fail-fast");
            return Err(ExitCode(1).into());
        }
    }

    println!(
        "Seeded {} records ({} already existed, {} failed)",
        totals.inserted, totals.existing, totals.failed
    );
    Ok(())
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
