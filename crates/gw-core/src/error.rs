//! Error types for gw-core

use thiserror::Error;

/// Core error type for Groundwork
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Invalid configuration value
    #[error("[C002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C003: Required environment variable is not set
    #[error("[C003] {var} environment variable not set")]
    MissingEnv { var: &'static str },

    /// C004: Table name does not match any built-in dataset
    #[error("[C004] Unknown dataset '{table}'. Known datasets: {known}")]
    UnknownDataset { table: String, known: &'static str },

    /// C005: IO error with file path context
    #[error("[C005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// C006: YAML parse error
    #[error("[C006] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
