//! Optional remote-data collaborator.
//!
//! Nothing in the list/render/controller path depends on this module; hosts
//! that want remote data call [`fetch_data`] themselves and decide what to do
//! with the decoded body.

use std::time::Duration;

use tracing::debug;

use crate::api::ShoppingListConfig;
use crate::error::{ListError, ListResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl FetchConfig {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(12),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&ShoppingListConfig> for FetchConfig {
    fn from(config: &ShoppingListConfig) -> Self {
        Self::new(config.fetch_endpoint.clone())
    }
}

/// Issues a GET to the configured endpoint and decodes the JSON body.
///
/// Blocks the caller. Transport failures, non-success statuses and undecodable
/// bodies all surface as [`ListError::Fetch`].
pub fn fetch_data(config: &FetchConfig) -> ListResult<serde_json::Value> {
    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| ListError::Fetch(format!("client setup failed: {e}")))?;

    debug!(endpoint = %config.endpoint, "fetching remote data");
    client
        .get(config.endpoint.as_str())
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(|e| ListError::Fetch(format!("request to {} failed: {e}", config.endpoint)))?
        .json::<serde_json::Value>()
        .map_err(|e| ListError::Fetch(format!("response decode failed: {e}")))
}
