//! Configuration types and parsing for groundwork.yml
//!
//! Credentials are never part of the config file: the service role key and
//! the database password come from the environment at invocation time.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main project configuration from groundwork.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// PostgREST endpoint used by the RPC and direct-row transports
    pub endpoint: EndpointConfig,

    /// Connection details for the local psql transport
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Readiness polling applied between migration steps
    #[serde(default)]
    pub readiness: ReadinessConfig,
}

/// PostgREST endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointConfig {
    /// Base URL of the hosted project (e.g. `https://myproject.example.co`)
    pub base_url: String,
}

/// Direct database connection configuration.
///
/// The password is read from `POSTGRES_PASSWORD` and handed to psql via the
/// child environment only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_dbname")]
    pub dbname: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            dbname: default_dbname(),
        }
    }
}

/// Readiness polling configuration.
///
/// Remote schema changes take a moment to propagate through the endpoint's
/// schema cache; between migration steps the runner pings until the
/// transport answers or the attempt budget runs out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadinessConfig {
    /// Number of ping attempts before giving up
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    /// Delay between attempts in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            attempts: default_attempts(),
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_dbname() -> String {
    "postgres".to_string()
}

fn default_attempts() -> u32 {
    5
}

fn default_delay_ms() -> u64 {
    500
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        log::debug!(
            "loaded config for project '{}' from {}",
            config.name,
            path.display()
        );
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for groundwork.yml or groundwork.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("groundwork.yml");
        let yaml_path = dir.join("groundwork.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: dir.join("groundwork.yml").display().to_string(),
            })
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        let base_url = &self.endpoint.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CoreError::ConfigInvalid {
                message: format!("endpoint.base_url must be an http(s) URL, got '{base_url}'"),
            });
        }

        if self.readiness.attempts == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "readiness.attempts must be at least 1".to_string(),
            });
        }

        if self.database.port == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "database.port cannot be 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
