//! # sapsf-odata-api
//!
//! A SAP SuccessFactors OData V2 API client library for Rust.
//!
//! This library provides access to the SuccessFactors User entity with
//! Basic authentication, verb emulation for MERGE/REPLACE, and typed errors
//! that keep the status and body of every failed response.
//!
//! ## Security
//!
//! This library is designed with security in mind:
//! - Passwords and Authorization values are redacted in Debug output
//! - Tracing skips credential parameters and request bodies
//! - Logged error bodies are sanitized and truncated
//! - Entity keys are validated and percent-encoded before use in a path
//!
//! ## Crates
//!
//! - **sapsf-client** - Core HTTP client: connection pool, timeouts, compression, error taxonomy
//! - **sapsf-auth** - Credentials: environment loading, validation, Basic header
//! - **sapsf-odata** - OData V2: query options, request planning, User operations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sapsf_odata_api::{BasicCredentials, QueryOptions, UserClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // SF_API_SERVER_V2, SF_COMPANY_ID, SF_USERNAME, SF_PASSWORD
//!     let creds = BasicCredentials::from_env()?;
//!
//!     let client = UserClient::from_credentials(&creds)?;
//!
//!     let users = client
//!         .list_users(&QueryOptions::new().select(&["userId", "username"]).top(10))
//!         .await?;
//!
//!     for user in users["d"]["results"].as_array().into_iter().flatten() {
//!         println!("{}", user["username"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use sapsf_auth as auth;
#[cfg(feature = "client")]
pub use sapsf_client as client;
#[cfg(feature = "odata")]
pub use sapsf_odata as odata;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use sapsf_auth::{BasicCredentials, Credentials};
#[cfg(feature = "client")]
pub use sapsf_client::{ClientConfig, Error, ODataClient};
#[cfg(feature = "odata")]
pub use sapsf_odata::{ODataOperation, QueryOptions, UserClient, UserRecord};
