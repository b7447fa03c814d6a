//! Verify command implementation
//!
//! Read-back checks after seeding: total board count via the endpoint's
//! exact count, the distinct industry list (deduped client-side since
//! PostgREST has no DISTINCT), and a probe for the job_roles table.

use anyhow::{Context, Result};
use gw_transport::RestTransport;

use crate::cli::GlobalArgs;
use crate::commands::common::{load_config, require_service_key, ExitCode};

/// Execute the verify command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let key = require_service_key(global)?;
    let transport = RestTransport::new(&config.endpoint.base_url, key)
        .context("Failed to build REST transport")?;

    let total = transport
        .count_rows("job_boards")
        .await
        .context("Failed to count job_boards rows")?;
    println!("job_boards: {total} rows");

    let mut industries = transport
        .select_column("job_boards", "industry")
        .await
        .context("Failed to read industries")?;
    industries.sort();
    industries.dedup();

    println!("\nIndustries ({}):", industries.len());
    for industry in &industries {
        println!("  - {industry}");
    }

    if transport
        .probe_table("job_roles")
        .await
        .context("Failed to probe job_roles")?
    {
        println!("\njob_roles: present");
        Ok(())
    } else {
        println!("\njob_roles: missing (run `gw migrate` first)");
        Err(ExitCode(1).into())
    }
}
