//! User lifecycle against a mock tenant, through the facade crate.

use super::common::{mock_tenant, COMPANY_ID, PASSWORD, USERNAME};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sapsf_odata_api::{BasicCredentials, QueryOptions, UserClient, UserRecord};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn test_user_lifecycle() {
    let (server, client) = mock_tenant().await;

    let mut record = UserRecord::new();
    record.insert("userId".to_string(), json!("jdoe"));
    record.insert("username".to_string(), json!("jdoe"));
    record.insert("status".to_string(), json!("t"));

    Mock::given(method("POST"))
        .and(path("/odata/v2/upsert"))
        .and(body_json(&record))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "d": [{"key": "User/userId=jdoe", "status": "OK", "editStatus": "UPSERTED"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/odata/v2/User('jdoe')"))
        .and(query_param("$format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "d": {"userId": "jdoe", "username": "jdoe", "status": "t"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/odata/v2/User('jdoe')"))
        .and(header("X-HTTP-METHOD", "MERGE"))
        .and(body_json(json!({"email": "jdoe@example.com"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/odata/v2/User('jdoe')"))
        .and(header("X-HTTP-METHOD", "MERGE"))
        .and(body_json(json!({"status": "f"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_user(&record)
        .await
        .expect("create_user should succeed");
    assert_eq!(created["d"][0]["editStatus"], "UPSERTED");

    let fetched = client
        .get_user("jdoe", &[], &[])
        .await
        .expect("get_user should succeed");
    assert_eq!(fetched["d"]["status"], "t");

    let merged = client
        .update_user("jdoe", &json!({"email": "jdoe@example.com"}), false)
        .await
        .expect("update_user should succeed");
    assert!(merged.is_null());

    let deactivated = client
        .delete_user("jdoe")
        .await
        .expect("delete_user should succeed");
    assert!(deactivated.is_null());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4, "one round trip per operation");
    assert!(requests.iter().all(|r| r.method.as_str() != "DELETE"));
}

// ============================================================================
// Configuration and transport
// ============================================================================

#[tokio::test]
async fn test_credentials_from_lookup_reach_the_wire() {
    let (server, _) = mock_tenant().await;
    let base_url = format!("{}/odata/v2/", server.uri());

    let creds = BasicCredentials::from_lookup(|name| match name {
        "SAPSF_BASE_URL" => Some(base_url.clone()),
        "SF_COMPANY_ID" => Some(COMPANY_ID.to_string()),
        "SF_USERNAME" => Some(USERNAME.to_string()),
        "SF_PASSWORD" => Some(PASSWORD.to_string()),
        _ => None,
    })
    .expect("credentials should load");

    Mock::given(method("GET"))
        .and(path("/odata/v2/User"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"d": {"results": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = UserClient::from_credentials(&creds).expect("Failed to create client");
    client
        .list_users(&QueryOptions::new().top(1))
        .await
        .expect("list_users should succeed");

    let requests = server.received_requests().await.unwrap();
    let authorization = requests[0]
        .headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .expect("Authorization header");
    let token = authorization.strip_prefix("Basic ").expect("Basic scheme");
    let decoded = String::from_utf8(STANDARD.decode(token).unwrap()).unwrap();
    assert_eq!(decoded, format!("{}@{}:{}", USERNAME, COMPANY_ID, PASSWORD));
}

#[tokio::test]
async fn test_clones_share_pool_and_run_concurrently() {
    let (server, client) = mock_tenant().await;

    Mock::given(method("GET"))
        .and(path("/odata/v2/User('a')"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"d": {"userId": "a"}})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/odata/v2/User('b')"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"d": {"userId": "b"}})))
        .mount(&server)
        .await;

    let other = client.clone();
    let (a, b) = tokio::join!(
        client.get_user("a", &[], &[]),
        other.get_user("b", &[], &[])
    );

    assert_eq!(a.unwrap()["d"]["userId"], "a");
    assert_eq!(b.unwrap()["d"]["userId"], "b");
}

#[tokio::test]
async fn test_server_error_keeps_text_body() {
    let (server, client) = mock_tenant().await;

    Mock::given(method("GET"))
        .and(path("/odata/v2/User"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = client
        .list_users(&QueryOptions::new())
        .await
        .expect_err("503 should fail");

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_payload(), json!({"error": "Service Unavailable"}));
    assert!(err.odata_error().is_none());
}
