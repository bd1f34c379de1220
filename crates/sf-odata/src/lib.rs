//! # sapsf-odata
//!
//! SAP SuccessFactors OData V2 client for the User entity.
//!
//! ## Features
//!
//! - **Read** - single users by key and User collection queries
//! - **Write** - create and upsert through the `upsert` endpoint
//! - **Update** - full replace (`PUT`) or partial merge (`MERGE` over `POST`)
//! - **Soft delete** - deactivation by setting `status` to `"f"`
//! - **Query options** - `$filter`, `$select`, `$expand`, `$orderby`, `$top`, `$skip`
//!
//! Requests are planned as plain [`ODataRequest`] values (see [`users`]) and
//! sent by [`UserClient::dispatch`], which owns the MERGE/REPLACE emulation.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sapsf_auth::BasicCredentials;
//! use sapsf_odata::{QueryOptions, UserClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = BasicCredentials::from_env()?;
//!     let client = UserClient::from_credentials(&creds)?;
//!
//!     let users = client
//!         .list_users(
//!             &QueryOptions::new()
//!                 .select(&["userId", "username"])
//!                 .order_by("username asc")
//!                 .top(5),
//!         )
//!         .await?;
//!
//!     match client.get_user("cgrant", &[], &[]).await {
//!         Ok(user) => println!("{user:#}"),
//!         Err(err) => println!("{:#}", err.to_payload()),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod entity;
mod method;
mod operation;
mod query;
pub mod users;

pub use client::UserClient;
pub use entity::{entity_key_path, UserRecord, UPSERT_ENDPOINT, USER_ENTITY_SET};
pub use method::ODataMethod;
pub use operation::{ODataOperation, ODataRequest};
pub use query::QueryOptions;

// Error types are shared with the HTTP layer.
pub use sapsf_client::{Error, ErrorBody, ErrorKind, ODataErrorDetail, Result};
