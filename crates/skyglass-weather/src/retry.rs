//! Backoff for `forecast.json` requests.
//!
//! Transport hiccups and upstream overload (5xx, 408, 429) get another try.
//! WeatherAPI's own 4xx answers (unknown city, bad key) are final.

use std::future::Future;
use std::time::Duration;

use reqwest::{Response, StatusCode};

/// How many extra attempts a lookup gets and how long to wait between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    /// Extra attempts after the first request
    pub retries: u32,
    /// Wait before the first retry; doubled for each one after
    pub base: Duration,
    /// Longest single wait
    pub cap: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            retries: 3,
            base: Duration::from_millis(100),
            cap: Duration::from_secs(5),
        }
    }
}

impl Backoff {
    pub fn new(retries: u32, base: Duration, cap: Duration) -> Self {
        Self { retries, base, cap }
    }

    /// Wait after failed attempt number `attempt` (zero-based)
    pub fn wait(&self, attempt: u32) -> Duration {
        self.base
            .checked_mul(2u32.saturating_pow(attempt))
            .unwrap_or(self.cap)
            .min(self.cap)
    }
}

fn retryable_status(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
}

fn retryable_error(error: &reqwest::Error) -> bool {
    error.is_timeout() || error.is_connect() || error.status().is_some_and(retryable_status)
}

/// Send via `request` until the answer is final or `backoff` is used up.
///
/// A retryable status on the last attempt comes back as `Ok` so the caller
/// can turn the body into a typed error.
pub(crate) async fn send_with_backoff<F, Fut>(
    backoff: &Backoff,
    request: F,
) -> Result<Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Response, reqwest::Error>>,
{
    let mut attempt = 0;

    loop {
        let exhausted = attempt >= backoff.retries;

        match request().await {
            Ok(response) if exhausted || !retryable_status(response.status()) => {
                if attempt > 0 {
                    tracing::info!(
                        "Lookup settled after {} retries ({})",
                        attempt,
                        response.status()
                    );
                }
                return Ok(response);
            }
            Ok(response) => {
                tracing::warn!("WeatherAPI answered {}, retrying", response.status());
            }
            Err(e) if exhausted || !retryable_error(&e) => return Err(e),
            Err(e) => {
                tracing::warn!("Lookup attempt {} failed, retrying: {}", attempt + 1, e);
            }
        }

        tokio::time::sleep(backoff.wait(attempt)).await;
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_doubles_then_caps() {
        let backoff = Backoff::new(5, Duration::from_millis(100), Duration::from_millis(1000));
        assert_eq!(backoff.wait(0), Duration::from_millis(100));
        assert_eq!(backoff.wait(1), Duration::from_millis(200));
        assert_eq!(backoff.wait(2), Duration::from_millis(400));
        assert_eq!(backoff.wait(4), Duration::from_millis(1000));
        assert_eq!(backoff.wait(40), Duration::from_millis(1000));
    }

    #[test]
    fn test_zero_base_never_waits() {
        let backoff = Backoff::new(0, Duration::ZERO, Duration::ZERO);
        assert_eq!(backoff.wait(3), Duration::ZERO);
    }

    #[test]
    fn test_overload_is_retried_but_api_rejections_are_not() {
        assert!(retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(retryable_status(StatusCode::BAD_GATEWAY));
        assert!(retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(retryable_status(StatusCode::REQUEST_TIMEOUT));

        // unknown city, bad key
        assert!(!retryable_status(StatusCode::BAD_REQUEST));
        assert!(!retryable_status(StatusCode::UNAUTHORIZED));
        assert!(!retryable_status(StatusCode::FORBIDDEN));
        assert!(!retryable_status(StatusCode::OK));
    }
}
