//! Wildcard request forwarding.

use axum::{
    Json, Router,
    body::Body,
    extract::{Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

/// Largest request body the proxy will buffer before forwarding.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Shared state handed to the fallback handler.
#[derive(Debug, Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    base_url: Url,
}

impl ProxyState {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

/// Build the proxy router: every path and every method forwards.
pub fn router(state: ProxyState) -> Router {
    Router::new().fallback(proxy_request).with_state(state)
}

async fn proxy_request(
    State(state): State<ProxyState>,
    request: Request,
) -> Response {
    match forward(&state, request).await {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "backend unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": "Backend unreachable" })),
            )
                .into_response()
        }
    }
}

async fn forward(
    state: &ProxyState,
    request: Request,
) -> anyhow::Result<Response> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = format!(
        "{}{}",
        state.base_url.as_str().trim_end_matches('/'),
        path_and_query
    );
    debug!(method = %parts.method, %url, "forwarding request");

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES).await?;

    let mut upstream = state.client.request(parts.method, url);
    if let Some(content_type) =
        parts.headers.get(header::CONTENT_TYPE).cloned()
    {
        upstream = upstream.header(header::CONTENT_TYPE, content_type);
    }
    if !body.is_empty() {
        upstream = upstream.body(body);
    }

    // A send error means the backend could not be reached. Backend status
    // codes, including errors, are relayed verbatim below.
    let response = upstream.send().await?;

    let status = response.status();
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = response.bytes().await?;

    let mut builder = Response::builder().status(status);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    Ok(builder.body(Body::from(bytes))?)
}
