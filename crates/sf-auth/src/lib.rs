//! # sapsf-auth
//!
//! SAP SuccessFactors credentials for the OData V2 API.
//!
//! ## Security
//!
//! - Passwords are redacted in Debug output
//! - Tracing skips credential parameters
//! - Credentials are loaded at startup from the environment, never compiled in
//!
//! ## Supported Authentication Methods
//!
//! - **HTTP Basic** - `username@companyId:password`, base64-encoded
//!
//! ## Example
//!
//! ```rust,ignore
//! use sapsf_auth::{BasicCredentials, Credentials};
//!
//! // From environment variables
//! let creds = BasicCredentials::from_env()?;
//!
//! // Explicit
//! let creds = BasicCredentials::new(
//!     "https://api17.sapsf.com/odata/v2",
//!     "ACME",
//!     "admin",
//!     "secret",
//! );
//! creds.validate()?;
//!
//! let header = creds.authorization_header();
//! ```

mod credentials;
mod error;

pub use credentials::{BasicCredentials, Credentials};
pub use error::{Error, ErrorKind, Result};

/// Environment variables consulted for the OData service root URL.
pub const BASE_URL_VARS: &[&str] = &["SF_API_SERVER_V2", "SAPSF_BASE_URL"];

/// Environment variables consulted for the company id.
pub const COMPANY_ID_VARS: &[&str] = &["SF_COMPANY_ID", "SAPSF_COMPANY_ID"];

/// Environment variables consulted for the API username.
pub const USERNAME_VARS: &[&str] = &["SF_USERNAME", "SAPSF_USERNAME"];

/// Environment variables consulted for the API password.
pub const PASSWORD_VARS: &[&str] = &["SF_PASSWORD", "SAPSF_PASSWORD"];
