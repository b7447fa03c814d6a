//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Groundwork - schema migrations and reference-data seeding for the job
/// boards database
#[derive(Parser, Debug)]
#[command(name = "gw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Service role key for the RPC and REST transports
    #[arg(long, global = true, env = "GW_SERVICE_KEY", hide_env_values = true)]
    pub service_key: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply schema and data migrations in order
    Migrate(MigrateArgs),

    /// Seed reference tables one record at a time over REST
    Seed(SeedArgs),

    /// Verify seeded data: row counts and distinct industries
    Verify,
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Transport used to execute migration SQL
    #[arg(long, value_enum, default_value = "rpc")]
    pub via: TransportVia,

    /// Keep applying later steps after a failure instead of stopping
    #[arg(long)]
    pub no_fail_fast: bool,

    /// Print the rendered SQL without connecting
    #[arg(long)]
    pub dry_run: bool,
}

/// SQL execution transports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportVia {
    /// Authenticated HTTPS POST to the execute_sql RPC endpoint
    Rpc,
    /// Local psql client (requires POSTGRES_PASSWORD)
    Psql,
}

/// Arguments for the seed command
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Tables to seed (comma-separated, default: all)
    #[arg(short, long)]
    pub tables: Option<String>,

    /// Stop at the first failed record instead of best-effort seeding
    #[arg(long)]
    pub fail_fast: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
