//! Local psql transport.
//!
//! Writes the SQL text to a temporary file and runs the `psql` command-line
//! client against the target host. The password reaches the child process
//! only through the `PGPASSWORD` environment variable, never through argv,
//! and the temporary file is removed on every exit path (RAII).

use crate::error::{TransportError, TransportResult};
use crate::traits::SqlTransport;
use async_trait::async_trait;
use std::io::Write;
use std::process::Stdio;
use std::time::Duration;

/// Upper bound on a single psql invocation.
const PSQL_TIMEOUT: Duration = Duration::from_secs(120);

/// Transport executing SQL through the local psql client.
pub struct PsqlTransport {
    host: String,
    port: u16,
    user: String,
    dbname: String,
    password: String,
}

impl std::fmt::Debug for PsqlTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PsqlTransport")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("dbname", &self.dbname)
            .field("password", &"***")
            .finish()
    }
}

impl PsqlTransport {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        dbname: impl Into<String>,
        password: String,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            dbname: dbname.into(),
            password,
        }
    }

    /// Check that `psql` is available on the system PATH.
    pub fn check_available() -> TransportResult<()> {
        match std::process::Command::new("psql")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) if status.success() => Ok(()),
            _ => Err(TransportError::ClientNotFound),
        }
    }
}

#[async_trait]
impl SqlTransport for PsqlTransport {
    async fn execute_sql(&self, sql: &str) -> TransportResult<()> {
        let mut script = tempfile::Builder::new()
            .prefix("gw-")
            .suffix(".sql")
            .tempfile()?;
        script.write_all(sql.as_bytes())?;
        script.flush()?;

        let mut cmd = tokio::process::Command::new("psql");
        cmd.arg("-h")
            .arg(&self.host)
            .arg("-p")
            .arg(self.port.to_string())
            .arg("-U")
            .arg(&self.user)
            .arg("-d")
            .arg(&self.dbname)
            // psql's default is to keep going past SQL errors while still
            // exiting 0; ON_ERROR_STOP makes the exit code meaningful.
            .arg("-v")
            .arg("ON_ERROR_STOP=1")
            .arg("-f")
            .arg(script.path())
            .env("PGPASSWORD", &self.password)
            .stdin(Stdio::null());

        let output = tokio::time::timeout(PSQL_TIMEOUT, cmd.output())
            .await
            .map_err(|_| TransportError::Timeout {
                seconds: PSQL_TIMEOUT.as_secs(),
            })??;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if output.status.success() {
            log::debug!("psql: {}", String::from_utf8_lossy(&output.stdout).trim());
            if !stderr.trim().is_empty() {
                log::warn!("psql warnings: {}", stderr.trim());
            }
            Ok(())
        } else {
            Err(TransportError::ClientExecution {
                exit_code: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            })
        }
    }

    async fn ping(&self) -> TransportResult<()> {
        self.execute_sql("SELECT 1;").await
    }

    fn kind(&self) -> &'static str {
        "psql"
    }
}
