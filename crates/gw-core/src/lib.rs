//! gw-core - Core library for Groundwork
//!
//! This crate provides the typed seed records and their built-in datasets,
//! the migration step registry, SQL text rendering, and configuration
//! parsing shared by the transport layer and the CLI.

pub mod config;
pub mod dataset;
pub mod error;
pub mod record;
pub mod sql;
pub mod step;

pub use config::Config;
pub use dataset::{Dataset, SeedRow};
pub use error::{CoreError, CoreResult};
pub use record::{BoardRecord, RoleRecord};
pub use step::{migration_steps, MigrationStep};
