//! Read-only tests against a real tenant.

use super::common::{live_credentials, live_user_id};
use sapsf_odata_api::{QueryOptions, UserClient};

#[tokio::test]
#[ignore]
async fn test_live_get_user() {
    let creds = live_credentials();
    let client = UserClient::from_credentials(&creds).expect("Failed to create client");
    let user_id = live_user_id();

    let user = client
        .get_user(&user_id, &["userId", "username", "status"], &[])
        .await
        .unwrap_or_else(|e| panic!("get_user failed: {}", e.to_payload()));

    assert_eq!(user["d"]["userId"], user_id.as_str());
}

#[tokio::test]
#[ignore]
async fn test_live_list_users() {
    let creds = live_credentials();
    let client = UserClient::from_credentials(&creds).expect("Failed to create client");

    let page = client
        .list_users(
            &QueryOptions::new()
                .select(&["userId", "username"])
                .order_by("username asc")
                .top(5),
        )
        .await
        .unwrap_or_else(|e| panic!("list_users failed: {}", e.to_payload()));

    let results = page["d"]["results"].as_array().expect("results array");
    assert!(results.len() <= 5, "$top=5 should cap the page");
}

#[tokio::test]
#[ignore]
async fn test_live_missing_user_is_protocol_error() {
    let creds = live_credentials();
    let client = UserClient::from_credentials(&creds).expect("Failed to create client");

    let err = client
        .get_user("sapsf-odata-api-no-such-user", &[], &[])
        .await
        .expect_err("unknown user should fail");

    assert!(err.is_protocol());
    assert!(err.to_payload().get("error").is_some());
}
