//! HTTP fetch of the grid endpoint.
//!
//! One client, one GET per invocation. No retries, no resumption; a
//! transport failure or non-success status aborts the run.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{GridError, GridResult};

/// Default endpoint for grid section queries.
pub const DEFAULT_ENDPOINT: &str = "https://api.what3words.com/v2/grid";

/// Build the request URL. `bbox` and `key` are inserted verbatim; the
/// caller is responsible for any validation.
pub fn grid_url(endpoint: &str, bbox: &str, key: &str) -> String {
    format!("{}?bbox={}&format=json&key={}", endpoint, bbox, key)
}

/// Issues grid requests over an explicitly owned HTTP client.
pub struct Fetcher {
    client: Client,
    endpoint: String,
}

impl Fetcher {
    /// Create a fetcher with its own connection pool.
    pub fn new(endpoint: impl Into<String>) -> GridResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Perform a single GET against the grid endpoint and return the full
    /// response body as text.
    pub async fn fetch_grid(&self, bbox: &str, key: &str) -> GridResult<String> {
        let url = grid_url(&self.endpoint, bbox, key);
        debug!(url = %url, "Requesting grid");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GridError::HttpStatus(status));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Received grid response");

        Ok(body)
    }
}
