pub mod sources;

use std::time::Duration;

use url::Url;

/// Fully resolved configuration for the Vantage stack.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendConfig,
    pub poll: PollConfig,
    pub proxy: ProxyConfig,
}

/// Where the backend lives.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: Url,
}

/// Polling cadence for the state synchronization layer.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub interval_ms: u64,
}

impl PollConfig {
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Bind address for the reverse proxy.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
}

impl ProxyConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
