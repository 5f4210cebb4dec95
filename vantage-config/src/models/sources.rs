//! Raw, unvalidated configuration values as read from the environment.

/// Environment values before validation. Every field is optional; the
/// loader decides defaults and guard rails.
#[derive(Debug, Clone, Default)]
pub struct EnvSources {
    pub backend_url: Option<String>,
    pub poll_interval_ms: Option<u64>,
    pub proxy_host: Option<String>,
    pub proxy_port: Option<u16>,
}

impl EnvSources {
    /// Read all recognized variables from the process environment.
    pub fn from_env() -> Self {
        Self {
            backend_url: std::env::var("VANTAGE_BACKEND_URL").ok(),
            poll_interval_ms: std::env::var("VANTAGE_POLL_INTERVAL_MS")
                .ok()
                .and_then(|raw| raw.parse().ok()),
            proxy_host: std::env::var("VANTAGE_PROXY_HOST").ok(),
            proxy_port: std::env::var("VANTAGE_PROXY_PORT")
                .ok()
                .and_then(|raw| raw.parse().ok()),
        }
    }
}
