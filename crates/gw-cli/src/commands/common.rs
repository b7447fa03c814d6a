//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use gw_core::error::CoreError;
use gw_core::Config;
use std::fmt;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Intentionally empty: ExitCode is a control-flow mechanism, not a
        // user-facing error. The diagnostics were already printed by the
        // command that raised it.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Load groundwork.yml, honoring `--config` and `--project-dir`.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let config = match &global.config {
        Some(path) => Config::load(Path::new(path)),
        None => Config::load_from_dir(Path::new(&global.project_dir)),
    }
    .context("Failed to load configuration")?;
    Ok(config)
}

/// Resolve the service role key from `--service-key` / `GW_SERVICE_KEY`.
///
/// Prints setup instructions and fails before any network call when the key
/// is missing.
pub(crate) fn require_service_key(global: &GlobalArgs) -> Result<String> {
    match &global.service_key {
        Some(key) if !key.is_empty() => Ok(key.clone()),
        _ => {
            eprintln!("Set the service role key before running this command:");
            eprintln!("  export GW_SERVICE_KEY='<service role key>'");
            Err(CoreError::MissingEnv {
                var: "GW_SERVICE_KEY",
            }
            .into())
        }
    }
}
