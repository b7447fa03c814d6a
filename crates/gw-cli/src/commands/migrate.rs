//! Migrate command implementation
//!
//! Applies the built-in migration steps strictly in order through the
//! chosen SQL transport. Fail-fast by default: a failed step stops the run
//! and later steps are not attempted.

use anyhow::{Context, Result};
use gw_core::error::CoreError;
use gw_core::step::migration_steps;
use gw_transport::runner::{apply_steps, ApplyOptions, SettlePolicy, StepState};
use gw_transport::{PsqlTransport, RpcTransport, SqlTransport};
use std::time::Duration;

use crate::cli::{GlobalArgs, MigrateArgs, TransportVia};
use crate::commands::common::{load_config, require_service_key, ExitCode};

/// Resolve the database password from `POSTGRES_PASSWORD`.
///
/// Refuses to run without it, printing operator instructions. Nothing is
/// spawned and no network call is made on this path.
pub(crate) fn resolve_db_password() -> Result<String> {
    match std::env::var("POSTGRES_PASSWORD") {
        Ok(password) if !password.is_empty() => Ok(password),
        _ => {
            eprintln!("POSTGRES_PASSWORD environment variable not set");
            eprintln!();
            eprintln!("You need to:");
            eprintln!("1. Go to the database dashboard -> Settings -> Database");
            eprintln!("2. Copy your database password");
            eprintln!("3. Run: export POSTGRES_PASSWORD='your_password'");
            Err(CoreError::MissingEnv {
                var: "POSTGRES_PASSWORD",
            }
            .into())
        }
    }
}

/// Execute the migrate command
pub async fn execute(args: &MigrateArgs, global: &GlobalArgs) -> Result<()> {
    let steps = migration_steps();

    if args.dry_run {
        for step in &steps {
            println!("-- migration {}: {}", step.tag(), step.label);
            println!("{}", step.sql);
        }
        return Ok(());
    }

    let config = load_config(global)?;

    let transport: Box<dyn SqlTransport> = match args.via {
        TransportVia::Rpc => {
            let key = require_service_key(global)?;
            Box::new(
                RpcTransport::new(&config.endpoint.base_url, key)
                    .context("Failed to build RPC transport")?,
            )
        }
        TransportVia::Psql => {
            let password = resolve_db_password()?;
            PsqlTransport::check_available()?;
            let db = &config.database;
            Box::new(PsqlTransport::new(
                &db.host, db.port, &db.user, &db.dbname, password,
            ))
        }
    };

    if global.verbose {
        eprintln!(
            "[verbose] Applying {} steps via {} transport",
            steps.len(),
            transport.kind()
        );
    }

    let options = ApplyOptions {
        fail_fast: !args.no_fail_fast,
        settle: Some(SettlePolicy {
            attempts: config.readiness.attempts,
            delay: Duration::from_millis(config.readiness.delay_ms),
        }),
    };

    println!("Applying {} migration steps...\n", steps.len());
    let report = apply_steps(transport.as_ref(), &steps, &options).await;

    for step in &report.steps {
        match step.state {
            StepState::Succeeded => println!("  ✓ {} {}", step.tag(), step.label),
            StepState::Failed => println!(
                "  ✗ {} {} - {}",
                step.tag(),
                step.label,
                step.error.as_deref().unwrap_or("unknown error")
            ),
            StepState::Pending => println!("  - {} {} (skipped)", step.tag(), step.label),
        }
    }

    println!();
    if report.succeeded() {
        println!("Applied {} steps", report.applied_count());
        Ok(())
    } else {
        if options.fail_fast {
            println!("Stopping due to failed migration step");
        } else {
            println!(
                "{} of {} steps failed",
                report.failed_count(),
                report.steps.len()
            );
        }
        Err(ExitCode(1).into())
    }
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod tests;
