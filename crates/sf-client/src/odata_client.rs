//! Authenticated OData V2 client.
//!
//! `ODataClient` combines a service root URL and an `Authorization` header
//! value with the pooled HTTP client, and stamps the standard OData JSON
//! headers onto every request.
//!
//! ## Security
//!
//! - The Authorization value is redacted in Debug output
//! - Request bodies are skipped in tracing spans

use tracing::instrument;

use crate::client::SfHttpClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::{RequestBuilder, RequestMethod};

/// Authenticated client for one OData V2 service root.
///
/// # Example
///
/// ```rust,ignore
/// use sapsf_client::{ODataClient, RequestMethod};
///
/// let client = ODataClient::new("https://api17.sapsf.com/odata/v2", "Basic ...")?;
/// let users = client
///     .send_json(
///         client
///             .request(RequestMethod::Get, "User")
///             .query("$format", "json")
///             .query("$top", "5"),
///     )
///     .await?;
/// ```
#[derive(Clone)]
pub struct ODataClient {
    http: SfHttpClient,
    base_url: String,
    authorization: String,
}

impl std::fmt::Debug for ODataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ODataClient")
            .field("base_url", &self.base_url)
            .field("authorization", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ODataClient {
    /// Create a client for the given service root and Authorization header value.
    pub fn new(base_url: impl Into<String>, authorization: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, authorization, ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        authorization: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = SfHttpClient::new(config)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            authorization: authorization.into(),
        })
    }

    /// Get the service root URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the HTTP configuration.
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Build the full URL for an endpoint: `base_url + "/" + endpoint`.
    ///
    /// The endpoint is always resolved under the service root, so requests
    /// carrying this client's Authorization never leave the tenant host.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Create an authenticated request with the standard OData JSON headers.
    pub fn request(&self, method: RequestMethod, endpoint: &str) -> RequestBuilder {
        RequestBuilder::new(method, self.url(endpoint))
            .authorization(&self.authorization)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
    }

    /// Execute a request and decode the JSON body (`Null` when empty).
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    pub async fn send_json(&self, request: RequestBuilder) -> Result<serde_json::Value> {
        self.http.send_json(request).await
    }
}
