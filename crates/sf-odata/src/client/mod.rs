//! SuccessFactors OData V2 client.
//!
//! This client wraps `ODataClient` from `sapsf-client` and adds the
//! request dispatcher plus the User entity operations.

use sapsf_auth::Credentials;
use sapsf_client::{ClientConfig, Error, ErrorKind, ODataClient, Result};

mod dispatch;
mod user;

/// SuccessFactors OData V2 client for the User entity.
///
/// Every operation is exactly one HTTP round trip and returns the decoded
/// JSON body, or an [`Error`](sapsf_client::Error) that keeps the status and
/// response body. The client is cheap to clone; clones share one connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use sapsf_auth::BasicCredentials;
/// use sapsf_odata::{QueryOptions, UserClient};
/// use serde_json::json;
///
/// let creds = BasicCredentials::from_env()?;
/// let client = UserClient::from_credentials(&creds)?;
///
/// let user = client.get_user("cgrant", &[], &[]).await?;
///
/// let page = client
///     .list_users(&QueryOptions::new().select(&["userId", "username"]).top(5))
///     .await?;
///
/// client
///     .update_user("cgrant", &json!({"email": "cgrant@example.com"}), false)
///     .await?;
///
/// // Soft delete: status = "f"
/// client.delete_user("cgrant").await?;
/// ```
#[derive(Debug, Clone)]
pub struct UserClient {
    client: ODataClient,
}

impl UserClient {
    /// Create a client for a service root and `Authorization` header value.
    pub fn new(base_url: impl Into<String>, authorization: impl Into<String>) -> Result<Self> {
        let client = ODataClient::new(base_url, authorization)?;
        Ok(Self { client })
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        authorization: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = ODataClient::with_config(base_url, authorization, config)?;
        Ok(Self { client })
    }

    /// Create a client bound to the given credentials, with default HTTP configuration.
    ///
    /// Credentials that fail [`Credentials::validate`] are rejected with a
    /// usage error and no client is built.
    pub fn from_credentials(credentials: &impl Credentials) -> Result<Self> {
        credentials
            .validate()
            .map_err(|e| Error::with_source(ErrorKind::Usage(e.to_string()), e))?;
        Self::new(credentials.base_url(), credentials.authorization_header())
    }

    /// Create a client from an existing ODataClient.
    pub fn from_client(client: ODataClient) -> Self {
        Self { client }
    }

    /// Get the underlying ODataClient.
    pub fn inner(&self) -> &ODataClient {
        &self.client
    }

    /// Get the service root URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapsf_auth::BasicCredentials;

    #[test]
    fn test_from_credentials() {
        let creds = BasicCredentials::new("https://api17.sapsf.com/odata/v2/", "ACME", "u", "p");
        let client = UserClient::from_credentials(&creds).unwrap();

        assert_eq!(client.base_url(), "https://api17.sapsf.com/odata/v2");
        assert!(!format!("{:?}", client).contains(&creds.basic_token()));
    }

    #[test]
    fn test_from_credentials_rejects_ambiguous_login() {
        let creds = BasicCredentials::new("https://api17.sapsf.com/odata/v2", "AC:ME", "a@b", "pw");
        let err = UserClient::from_credentials(&creds).unwrap_err();

        assert!(err.is_usage(), "unexpected error kind: {:?}", err.kind);
        assert!(err.to_string().contains("'@' or ':'"), "{err}");
    }

    #[test]
    fn test_with_config() {
        let config = ClientConfig::builder()
            .with_timeout(std::time::Duration::from_secs(5))
            .build();
        let client =
            UserClient::with_config("https://api17.sapsf.com/odata/v2", "Basic x", config).unwrap();

        assert_eq!(
            client.inner().config().timeout,
            std::time::Duration::from_secs(5)
        );
    }
}
