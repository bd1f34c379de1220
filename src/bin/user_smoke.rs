//! Smoke test of the User operations against a live tenant.
//!
//! Reads are always run. Writes only run with `SAPSF_SMOKE_WRITE=1`, and they
//! modify the user named by `SAPSF_SMOKE_USER` (default `cgrant`).
//!
//! ```sh
//! export SF_API_SERVER_V2='https://api17.sapsf.com/odata/v2'
//! export SF_COMPANY_ID='ACME' SF_USERNAME='apiadmin' SF_PASSWORD='...'
//! RUST_LOG=sapsf_client=debug cargo run --bin user-smoke
//! ```
//!
//! `SAPSF_TIMEOUT_SECS` and `SAPSF_CONNECT_TIMEOUT_SECS` override the HTTP timeouts.

use sapsf_odata_api::{BasicCredentials, ClientConfig, Credentials, Error, QueryOptions, UserClient};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

const DEFAULT_USER: &str = "cgrant";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let creds = BasicCredentials::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("  Export SF_API_SERVER_V2, SF_COMPANY_ID, SF_USERNAME and SF_PASSWORD");
        eprintln!("  (or the SAPSF_* equivalents) and re-run.");
        std::process::exit(1);
    });

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let client = match creds.odata_client(config) {
        Ok(odata) => UserClient::from_client(odata),
        Err(e) => {
            eprintln!("Error: Failed to create client: {e}");
            std::process::exit(1);
        }
    };

    let user_id = std::env::var("SAPSF_SMOKE_USER").unwrap_or_else(|_| DEFAULT_USER.to_string());
    println!("Tenant {} as {}\n", client.base_url(), creds.login_name());

    report("get_user", client.get_user(&user_id, &[], &[]).await);

    let options = QueryOptions::new()
        .select(&["userId", "username"])
        .order_by("username asc")
        .top(5);
    report("list_users", client.list_users(&options).await);

    if std::env::var("SAPSF_SMOKE_WRITE").as_deref() != Ok("1") {
        println!("Skipping writes (set SAPSF_SMOKE_WRITE=1 to run them)");
        return;
    }

    let record = json!({
        "userId": user_id,
        "username": user_id,
        "status": "t",
    });
    report("create_user", client.create_user(&record).await);

    report(
        "update_user",
        client
            .update_user(&user_id, &json!({ "email": format!("{user_id}@example.com") }), false)
            .await,
    );

    report("delete_user", client.delete_user(&user_id).await);
}

fn report(operation: &str, result: Result<Value, Error>) {
    let value = match result {
        Ok(value) => value,
        Err(err) => err.to_payload(),
    };
    match serde_json::to_string_pretty(&value) {
        Ok(text) => println!("{operation}:\n{text}\n"),
        Err(_) => println!("{operation}:\n{value}\n"),
    }
}
