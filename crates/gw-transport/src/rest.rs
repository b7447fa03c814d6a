//! Direct-row REST transport.
//!
//! Inserts one structured record at a time via the PostgREST table resource.
//! HTTP 409 (duplicate natural key) is reported as [`RowOutcome::AlreadyExists`]
//! rather than an error, so best-effort seeding loops can keep going. The
//! read-back helpers back the `verify` command.

use crate::error::{TransportError, TransportResult};
use crate::traits::{RowOutcome, RowTransport};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// Request timeout for a single row operation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport operating on PostgREST table resources.
pub struct RestTransport {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl std::fmt::Debug for RestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestTransport")
            .field("base_url", &self.base_url)
            .field("service_key", &"***")
            .finish()
    }
}

impl RestTransport {
    /// Create a transport against `base_url`, authenticated with the
    /// service role key.
    pub fn new(base_url: &str, service_key: String) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn get(&self, table: &str) -> reqwest::RequestBuilder {
        self.client
            .get(self.table_url(table))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
    }

    /// Exact row count of `table`.
    ///
    /// Uses PostgREST's `count=exact` preference with a single-row range and
    /// parses the total from the `Content-Range` header (e.g. `0-0/44`).
    pub async fn count_rows(&self, table: &str) -> TransportResult<u64> {
        let response = self
            .get(table)
            .header("Prefer", "count=exact")
            .header("Range", "0-0")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let range = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                TransportError::InvalidResponse("missing Content-Range header".to_string())
            })?;
        parse_content_range(range)
    }

    /// All values of `column` in `table`, in table order.
    ///
    /// PostgREST has no DISTINCT, so callers dedupe client-side.
    pub async fn select_column(&self, table: &str, column: &str) -> TransportResult<Vec<String>> {
        let response = self.get(table).query(&[("select", column)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<serde_json::Value> = response.json().await?;
        Ok(rows
            .iter()
            .filter_map(|row| row.get(column).and_then(|v| v.as_str()))
            .map(str::to_string)
            .collect())
    }

    /// Whether `table` is exposed by the endpoint (404 = absent).
    pub async fn probe_table(&self, table: &str) -> TransportResult<bool> {
        let response = self
            .get(table)
            .query(&[("select", "*"), ("limit", "1")])
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(TransportError::Server {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}

/// Parse the total from a `Content-Range` value such as `0-0/44` or `*/0`.
fn parse_content_range(value: &str) -> TransportResult<u64> {
    let (_, total) = value.split_once('/').ok_or_else(|| {
        TransportError::InvalidResponse(format!("malformed Content-Range: {value}"))
    })?;
    total.parse().map_err(|_| {
        TransportError::InvalidResponse(format!("malformed Content-Range: {value}"))
    })
}

#[async_trait]
impl RowTransport for RestTransport {
    async fn insert_row(
        &self,
        table: &str,
        body: &serde_json::Value,
    ) -> TransportResult<RowOutcome> {
        let response = self
            .client
            .post(self.table_url(table))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .json(body)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(RowOutcome::Inserted),
            StatusCode::CONFLICT => Ok(RowOutcome::AlreadyExists),
            status => {
                let detail = response.text().await.unwrap_or_default();
                Err(TransportError::Server {
                    status: status.as_u16(),
                    body: detail,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;
