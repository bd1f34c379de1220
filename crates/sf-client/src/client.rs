//! Core HTTP client with compression, timeouts and OData-specific handling.

use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBody, RequestBuilder};
use crate::response::{protocol_error, sanitize_for_log, Response};

/// HTTP client for OData V2 services.
///
/// Wraps a single `reqwest::Client`, so every request made through one
/// instance (or its clones) reuses the same connection pool.
#[derive(Debug, Clone)]
pub struct SfHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl SfHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed);

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a request.
    ///
    /// Exactly one round trip is made. Non-2xx responses become
    /// [`ErrorKind::Protocol`] carrying the decoded body; failures without a
    /// response become [`ErrorKind::Transport`] or [`ErrorKind::Timeout`].
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = match self.execute_once(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    error = %sanitize_for_log(&err.to_string()),
                    "OData request failed without a response"
                );
                return Err(err);
            }
        };

        if response.is_success() {
            return Ok(response);
        }

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    status,
                    error = %sanitize_for_log(&err.to_string()),
                    "Failed to read error response body"
                );
                return Err(Error::with_source(
                    ErrorKind::Transport(format!(
                        "HTTP {status} response body could not be read: {err}"
                    )),
                    err,
                ));
            }
        };
        warn!(
            status,
            body = %sanitize_for_log(&text),
            "OData request returned an error status"
        );
        Err(protocol_error(status, text))
    }

    async fn execute_once(&self, request: &RequestBuilder) -> Result<Response> {
        let mut url = url::Url::parse(&request.url)?;
        if !request.query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query_params);
        }

        let mut req = self.inner.request(request.method.to_reqwest(), url);

        if let Some(ref authorization) = request.authorization {
            req = req.header("Authorization", authorization.as_str());
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if self.config.accept_compressed {
            req = req.header("Accept-Encoding", "gzip, deflate");
        }

        if let Some(RequestBody::Json(ref value)) = request.body {
            req = req.json(value);
        }

        if self.config.enable_tracing {
            debug!(
                method = %request.method,
                url = %request.url,
                "Sending request"
            );
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            let content_length = response.content_length();
            debug!(status, content_length, "Response received");
        }

        Ok(Response::new(response))
    }

    /// Execute a request and decode the JSON response body.
    pub async fn send_json(&self, request: RequestBuilder) -> Result<serde_json::Value> {
        let response = self.execute(request).await?;
        response.json_value().await
    }
}
