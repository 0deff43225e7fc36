//! HTTP client abstractions.

use crate::error::FetchError;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Blocking HTTP client with a persistent cookie store.
///
/// One instance is meant for one owner; reuse across sequential calls is
/// fine and keeps the session cookie alive, but sharing a single instance
/// across threads requires external synchronization.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .user_agent(concat!("lodewatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { inner: client })
    }

    /// Performs a single GET request and returns the response body as text.
    ///
    /// Blocks until the response completes or the timeout elapses. There are
    /// no retries; a non-success status or transport failure is returned
    /// verbatim.
    pub fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!(url = %url, "Making GET request");

        let response = self.inner.get(url).send()?;
        let status = response.status();

        if !status.is_success() {
            warn!(url = %url, status = %status, "GET request returned non-success status");
            return Err(FetchError::HttpStatus(status));
        }

        Ok(response.text()?)
    }
}
