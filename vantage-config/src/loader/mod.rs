//! Resolves raw environment values into a validated [`Config`].

pub mod error;

use tracing::warn;
use url::Url;

use crate::constants::{
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_PROXY_HOST, DEFAULT_PROXY_PORT,
    MIN_POLL_INTERVAL_MS,
};
use crate::models::sources::EnvSources;
use crate::models::{BackendConfig, Config, PollConfig, ProxyConfig};
use error::ConfigLoadError;

/// Turns [`EnvSources`] into a validated [`Config`].
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Config, ConfigLoadError> {
        Self::resolve(EnvSources::from_env())
    }

    /// Resolve explicit sources. Split out from [`ConfigLoader::load`] so
    /// tests never touch the process environment.
    pub fn resolve(sources: EnvSources) -> Result<Config, ConfigLoadError> {
        let raw_url = sources
            .backend_url
            .ok_or(ConfigLoadError::MissingBackendUrl)?;
        let base_url = Url::parse(&raw_url)?;

        let requested =
            sources.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        let interval_ms = if requested < MIN_POLL_INTERVAL_MS {
            warn!(
                requested_ms = requested,
                floor_ms = MIN_POLL_INTERVAL_MS,
                "configured poll interval below floor, clamping"
            );
            MIN_POLL_INTERVAL_MS
        } else {
            requested
        };

        Ok(Config {
            backend: BackendConfig { base_url },
            poll: PollConfig { interval_ms },
            proxy: ProxyConfig {
                host: sources
                    .proxy_host
                    .unwrap_or_else(|| DEFAULT_PROXY_HOST.to_string()),
                port: sources.proxy_port.unwrap_or(DEFAULT_PROXY_PORT),
            },
        })
    }
}
