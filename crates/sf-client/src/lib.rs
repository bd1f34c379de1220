//! # sapsf-client
//!
//! Core HTTP client infrastructure for SAP SuccessFactors OData V2 APIs.
//!
//! This crate provides the foundational HTTP layer with:
//! - A single reusable connection pool per client
//! - Configurable request and connect timeouts
//! - Compression support (gzip, deflate)
//! - Uniform mapping of transport and protocol failures onto [`Error`]
//! - Request/response tracing with sanitized failure diagnostics
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (sapsf-odata: UserClient, QueryOptions, ODataOperation)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ODataClient                            │
//! │  - Holds base URL + Authorization header + HTTP client      │
//! │  - Standard OData headers (Accept, Content-Type)            │
//! │  - Decodes JSON bodies into serde_json::Value               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SfHttpClient                             │
//! │  - Raw HTTP over one pooled reqwest::Client                 │
//! │  - Request building, status classification                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sapsf_client::{ODataClient, RequestMethod};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sapsf_client::Error> {
//!     let client = ODataClient::new(
//!         "https://api17.sapsf.com/odata/v2",
//!         "Basic dXNlckBjb21wYW55OnNlY3JldA==",
//!     )?;
//!
//!     let user = client
//!         .send_json(
//!             client
//!                 .request(RequestMethod::Get, "User('cgrant')")
//!                 .query("$format", "json"),
//!         )
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod odata_client;
mod request;
mod response;
pub mod security;

pub use client::SfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder, CONNECT_TIMEOUT_VAR, TIMEOUT_VAR};
pub use error::{Error, ErrorBody, ErrorKind, ODataErrorDetail, Result};
pub use odata_client::ODataClient;
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::Response;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("sapsf-odata-api/", env!("CARGO_PKG_VERSION"));

/// Header used by OData V2 services to tunnel MERGE/REPLACE over POST.
pub const HTTP_METHOD_OVERRIDE_HEADER: &str = "X-HTTP-METHOD";
