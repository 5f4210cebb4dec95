//! Transport seam between the sync layer and the backend.
//!
//! The scheduler only ever talks to [`StateTransport`], so tests inject a
//! scripted fake and production wires up [`HttpTransport`].

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::info;
use url::Url;

use vantage_model::{ConvoyId, Snapshot, Vehicle};

use crate::error::{SyncError, SyncResult};

/// Network operations the sync layer depends on.
#[async_trait]
pub trait StateTransport: Send + Sync {
    /// Fetch the aggregate state document.
    async fn fetch_state(&self) -> SyncResult<Snapshot>;

    /// Fetch the vehicle roster of one convoy. On-demand only; never part
    /// of the polling loop.
    async fn fetch_vehicles(&self, convoy: ConvoyId)
    -> SyncResult<Vec<Vehicle>>;
}

/// Production transport over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    api_version: String,
}

impl HttpTransport {
    /// Create a new transport against the given backend base URL.
    pub fn new(base_url: Url) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        info!(%base_url, "creating backend transport");

        Self {
            client,
            base_url,
            api_version: "v1".to_string(),
        }
    }

    /// Build a versioned API URL.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/api/{}/{}", base, self.api_version, path)
    }

    /// Execute a GET and decode the body.
    ///
    /// Decoding is two-stage so the error taxonomy stays honest: transport
    /// failures are [`SyncError::Network`], non-2xx statuses are
    /// [`SyncError::Http`], and anything wrong with the body itself (bad
    /// JSON or a missing required section) is [`SyncError::Shape`].
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> SyncResult<T> {
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Http(status));
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|err| SyncError::Shape(format!("invalid JSON: {err}")))?;
        serde_json::from_value(value)
            .map_err(|err| SyncError::Shape(err.to_string()))
    }
}

#[async_trait]
impl StateTransport for HttpTransport {
    async fn fetch_state(&self) -> SyncResult<Snapshot> {
        self.get_json(self.build_url("advanced/unified/state")).await
    }

    async fn fetch_vehicles(
        &self,
        convoy: ConvoyId,
    ) -> SyncResult<Vec<Vehicle>> {
        self.get_json(self.build_url(&format!("convoys/{convoy}/vehicles")))
            .await
    }
}
