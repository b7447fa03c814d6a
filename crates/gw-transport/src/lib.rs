//! gw-transport - Transport layer for Groundwork
//!
//! This crate provides the `SqlTransport` and `RowTransport` capability
//! traits, their three implementations (SQL-over-RPC, direct-row REST, and
//! the local psql client), readiness polling, and the sequential migration
//! runner.

pub mod error;
pub mod psql;
pub mod readiness;
pub mod rest;
pub mod rpc;
pub mod runner;
pub mod traits;

pub use error::{TransportError, TransportResult};
pub use psql::PsqlTransport;
pub use readiness::wait_until_ready;
pub use rest::RestTransport;
pub use rpc::RpcTransport;
pub use runner::{apply_steps, ApplyOptions, ApplyReport, SettlePolicy, StepReport, StepState};
pub use traits::{RowOutcome, RowTransport, SqlTransport};
