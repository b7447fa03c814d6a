//! Error types for gw-transport

use thiserror::Error;

/// Transport operation errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Network or connection failure (T001)
    #[error("[T001] Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP response, body surfaced as detail (T002)
    #[error("[T002] Server returned HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// Nonzero exit from the external SQL client (T003)
    #[error("[T003] psql exited with code {exit_code}: {stderr}")]
    ClientExecution { exit_code: i32, stderr: String },

    /// psql binary not found on PATH (T004)
    #[error("[T004] psql not found on PATH. Install the PostgreSQL client tools and retry.")]
    ClientNotFound,

    /// SQL client ran past its time budget (T005)
    #[error("[T005] psql timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Response from the endpoint could not be interpreted (T006)
    #[error("[T006] Unexpected response: {0}")]
    InvalidResponse(String),

    /// IO error, e.g. writing the temporary SQL script (T007)
    #[error("[T007] IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for TransportError
pub type TransportResult<T> = Result<T, TransportError>;
