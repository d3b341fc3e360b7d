//! HTTP client for the marketplace search endpoint.

mod query;

use std::time::Duration;

use reqwest::Client;
use zinsight_core::AppConfig;

use crate::error::ClientError;
use crate::types::{SearchEnvelope, SearchResults};

pub use query::encode_component;

/// HTTP client for the best-seller search endpoint.
///
/// One call per search: no retries and no pagination. Non-2xx responses,
/// unparseable bodies, and envelopes that break the response contract are
/// all returned as typed [`ClientError`]s.
pub struct SearchClient {
    client: Client,
    endpoint: String,
    page_size: u32,
}

impl SearchClient {
    /// Creates a `SearchClient` with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidEndpoint`] if
    /// `endpoint` does not parse as a URL.
    pub fn new(
        endpoint: &str,
        timeout_secs: u64,
        user_agent: &str,
        page_size: u32,
    ) -> Result<Self, ClientError> {
        reqwest::Url::parse(endpoint).map_err(|e| ClientError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_owned(),
            page_size,
        })
    }

    /// Builds a client from the upstream settings in [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`SearchClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.upstream_url,
            config.upstream_timeout_secs,
            &config.upstream_user_agent,
            config.page_size,
        )
    }

    /// Runs one best-seller search for `term` and returns the first page.
    ///
    /// The term is trimmed before encoding.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] — network, TLS, or timeout failure.
    /// - [`ClientError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ClientError::Deserialize`] — body is not JSON of the expected shape.
    /// - [`ClientError::InvalidShape`] — `success` is not `true` or `products` is missing.
    pub async fn search(&self, term: &str) -> Result<SearchResults, ClientError> {
        let url = query::search_url(&self.endpoint, term.trim(), self.page_size)?;
        tracing::debug!(term = term.trim(), "requesting upstream search");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "upstream search request failed"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "upstream search returned error status");
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let envelope = serde_json::from_str::<SearchEnvelope>(&body).map_err(|e| {
            ClientError::Deserialize {
                context: "search response".to_owned(),
                source: e,
            }
        })?;

        envelope
            .into_results()
            .inspect_err(|e| tracing::warn!(error = %e, "upstream search response rejected"))
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
