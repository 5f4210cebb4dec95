//! Config defaults and guard-rail values.

/// Default poll interval when `VANTAGE_POLL_INTERVAL_MS` is unset.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5_000;

/// Floor applied to any configured poll interval to bound backend load.
pub const MIN_POLL_INTERVAL_MS: u64 = 1_000;

/// Default bind host for the reverse proxy.
pub const DEFAULT_PROXY_HOST: &str = "127.0.0.1";

/// Default bind port for the reverse proxy.
pub const DEFAULT_PROXY_PORT: u16 = 8600;
