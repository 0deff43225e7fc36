//! Lodestone client wiring.

use std::time::Duration;

use lodewatch_core::{CoreError, WorldStatus, WorldStatusSource};
use lodewatch_fetch::{FetchError, HttpClient};
use tracing::debug;
use url::Url;

use crate::error::LodestoneError;
use crate::parser::parse_world_status_page;

// ============================================================================
// Constants
// ============================================================================

/// Default Lodestone base URL.
///
/// The world status payload is identical across regional Lodestones, so the
/// EU host serves as the default; a different region goes in via
/// [`LodestoneConfig`].
pub const DEFAULT_BASE_URL: &str = "https://eu.finalfantasyxiv.com";

/// World status page path, relative to the base URL.
pub const WORLD_STATUS_PATH: &str = "/lodestone/worldstatus/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a [`LodestoneClient`].
#[derive(Debug, Clone)]
pub struct LodestoneConfig {
    /// Base URL of the Lodestone host to query.
    pub base_url: Url,
    /// Request timeout for the status page fetch.
    pub timeout: Duration,
}

impl Default for LodestoneConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// Client for the Lodestone world status page.
///
/// Owns the HTTP transport (including its cookie store — the Lodestone sets
/// a session cookie on first contact) and the resolved page URL. One
/// instance per owner; repeated sequential calls reuse the same session.
#[derive(Debug)]
pub struct LodestoneClient {
    http: HttpClient,
    world_status_url: Url,
}

impl LodestoneClient {
    /// Creates a client with the default configuration.
    pub fn new() -> Result<Self, LodestoneError> {
        Self::with_config(LodestoneConfig::default())
    }

    /// Creates a client with a custom configuration.
    pub fn with_config(config: LodestoneConfig) -> Result<Self, LodestoneError> {
        let world_status_url = config
            .base_url
            .join(WORLD_STATUS_PATH)
            .map_err(FetchError::from)?;
        let http = HttpClient::with_timeout(config.timeout)?;

        Ok(Self {
            http,
            world_status_url,
        })
    }

    /// Fetches the status page and extracts the current world list.
    ///
    /// Blocking: a single GET bounded by the configured timeout, then a pure
    /// in-memory extraction. Either fully succeeds or fully fails; there are
    /// no partial results.
    pub fn world_status(&self) -> Result<Vec<WorldStatus>, LodestoneError> {
        debug!(url = %self.world_status_url, "Fetching world status page");

        let body = self.http.get(self.world_status_url.as_str())?;
        parse_world_status_page(body.as_bytes())
    }
}

impl WorldStatusSource for LodestoneClient {
    fn world_status(&self) -> Result<Vec<WorldStatus>, CoreError> {
        LodestoneClient::world_status(self).map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_resolves_world_status_url() {
        let config = LodestoneConfig::default();
        let url = config.base_url.join(WORLD_STATUS_PATH).unwrap();
        assert_eq!(
            url.as_str(),
            "https://eu.finalfantasyxiv.com/lodestone/worldstatus/"
        );
    }

    #[test]
    fn test_config_accepts_custom_base_url() {
        let config = LodestoneConfig {
            base_url: Url::parse("https://na.finalfantasyxiv.com").unwrap(),
            ..LodestoneConfig::default()
        };

        let client = LodestoneClient::with_config(config).unwrap();
        assert_eq!(
            client.world_status_url.as_str(),
            "https://na.finalfantasyxiv.com/lodestone/worldstatus/"
        );
    }
}
