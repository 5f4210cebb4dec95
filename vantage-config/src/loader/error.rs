use thiserror::Error;

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("VANTAGE_BACKEND_URL is not set")]
    MissingBackendUrl,

    #[error("VANTAGE_BACKEND_URL is not a valid URL: {0}")]
    InvalidBackendUrl(#[from] url::ParseError),
}
