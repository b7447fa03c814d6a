//! Readiness polling.
//!
//! Remote schema changes take a moment to propagate through the endpoint's
//! schema cache. Instead of a fixed sleep, poll the transport's ping until
//! it answers or the attempt budget runs out.

use crate::error::TransportResult;
use crate::traits::SqlTransport;
use std::time::Duration;

/// Poll `transport.ping()` up to `attempts` times with `delay` between
/// tries.
///
/// Returns the last ping error if the transport never becomes ready.
/// `attempts` is clamped to at least 1.
pub async fn wait_until_ready(
    transport: &dyn SqlTransport,
    attempts: u32,
    delay: Duration,
) -> TransportResult<()> {
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match transport.ping().await {
            Ok(()) => return Ok(()),
            Err(e) if attempt >= attempts => return Err(e),
            Err(e) => {
                log::debug!(
                    "{} transport not ready (attempt {attempt}/{attempts}): {e}",
                    transport.kind()
                );
            }
        }
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

#[cfg(test)]
#[path = "readiness_test.rs"]
mod tests;
