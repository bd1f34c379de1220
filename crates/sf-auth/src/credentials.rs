//! Credentials trait and implementations.
//!
//! All credential types implement custom Debug to redact sensitive data.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use sapsf_client::{ClientConfig, ODataClient};

use crate::error::{Error, ErrorKind, Result};
use crate::{BASE_URL_VARS, COMPANY_ID_VARS, PASSWORD_VARS, USERNAME_VARS};

/// Trait for SuccessFactors credentials.
pub trait Credentials: Send + Sync {
    /// Get the OData V2 service root, e.g. `https://api17.sapsf.com/odata/v2`.
    fn base_url(&self) -> &str;

    /// Get the company (tenant) id.
    fn company_id(&self) -> &str;

    /// Full `Authorization` header value.
    fn authorization_header(&self) -> String;

    /// Check the credentials are well-formed enough to put on the wire.
    fn validate(&self) -> Result<()>;

    /// Build an [`ODataClient`] bound to these credentials.
    ///
    /// Fails without building a client if [`validate`](Self::validate) does.
    fn odata_client(&self, config: ClientConfig) -> Result<ODataClient> {
        self.validate()?;
        ODataClient::with_config(self.base_url(), self.authorization_header(), config)
            .map_err(Into::into)
    }
}

/// HTTP Basic credentials: `username@companyId:password`.
///
/// Immutable once built. The password is redacted in Debug output.
#[derive(Clone)]
pub struct BasicCredentials {
    base_url: String,
    company_id: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("base_url", &self.base_url)
            .field("company_id", &self.company_id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl BasicCredentials {
    /// Create new credentials with the given values.
    ///
    /// Nothing is checked here. [`Credentials::validate`] runs before any
    /// client is built from these values, and [`from_env`](Self::from_env)
    /// validates on load.
    pub fn new(
        base_url: impl Into<String>,
        company_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            company_id: company_id.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Required (first variable set wins):
    /// - `SF_API_SERVER_V2` or `SAPSF_BASE_URL`
    /// - `SF_COMPANY_ID` or `SAPSF_COMPANY_ID`
    /// - `SF_USERNAME` or `SAPSF_USERNAME`
    /// - `SF_PASSWORD` or `SAPSF_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup (a secret store,
    /// a parsed `.env` map, ...). Uses the same variable names as
    /// [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |names: &[&str]| -> Result<String> {
            names
                .iter()
                .find_map(|name| lookup(name).filter(|v| !v.is_empty()))
                .ok_or_else(|| {
                    let primary = names.first().copied().unwrap_or_default();
                    Error::new(ErrorKind::EnvVar(primary.to_string()))
                })
        };

        let creds = Self::new(
            first_set(BASE_URL_VARS)?,
            first_set(COMPANY_ID_VARS)?,
            first_set(USERNAME_VARS)?,
            first_set(PASSWORD_VARS)?,
        );
        creds.validate()?;

        debug!(
            base_url = %creds.base_url,
            company_id = %creds.company_id,
            "Loaded SuccessFactors credentials"
        );
        Ok(creds)
    }

    /// The API username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Login name as SuccessFactors expects it: `username@companyId`.
    pub fn login_name(&self) -> String {
        format!("{}@{}", self.username, self.company_id)
    }

    /// Base64 of `username@companyId:password`.
    pub fn basic_token(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.login_name(), self.password))
    }
}

impl Credentials for BasicCredentials {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn company_id(&self) -> &str {
        &self.company_id
    }

    fn authorization_header(&self) -> String {
        format!("Basic {}", self.basic_token())
    }

    /// Check the credentials are well-formed:
    ///
    /// - the base URL is an absolute `http`/`https` URL
    /// - username, company id and password are non-empty
    /// - username and company id contain neither `@` nor `:`, which would make
    ///   `username@companyId:password` ambiguous
    fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        for (field, value) in [("username", &self.username), ("company id", &self.company_id)] {
            if value.is_empty() {
                return Err(invalid(format!("{} is empty", field)));
            }
            if value.contains(['@', ':']) {
                return Err(invalid(format!("{} must not contain '@' or ':'", field)));
            }
        }

        if self.password.is_empty() {
            return Err(invalid("password is empty".to_string()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::new(ErrorKind::InvalidCredentials(message))
}
