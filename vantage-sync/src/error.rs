use reqwest::StatusCode;
use thiserror::Error;

/// Result type for sync-layer operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Failures of a single fetch cycle.
///
/// Every variant is recoverable: the polling loop keeps running, the last
/// good snapshot is retained, and the next successful poll or manual
/// refresh clears the error. The `Display` form is what reaches the UI
/// error banner.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The request could not be sent or the response never arrived.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status {0}")]
    Http(StatusCode),

    /// The body parsed but is not a valid state document.
    #[error("malformed state document: {0}")]
    Shape(String),
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Network(err.to_string())
    }
}
