use sapsf_odata_api::{BasicCredentials, UserClient};
use wiremock::MockServer;

pub const COMPANY_ID: &str = "ACME";
pub const USERNAME: &str = "apiadmin";
pub const PASSWORD: &str = "pa:ss@word";

/// Start a mock tenant and a client pointed at it.
pub async fn mock_tenant() -> (MockServer, UserClient) {
    let server = MockServer::start().await;
    let creds = BasicCredentials::new(
        format!("{}/odata/v2", server.uri()),
        COMPANY_ID,
        USERNAME,
        PASSWORD,
    );
    let client = UserClient::from_credentials(&creds).expect("Failed to create client");
    (server, client)
}

/// Credentials for the live tenant.
///
/// **IMPORTANT**: live tests MUST run against a real tenant. This panics with
/// instructions if the environment is incomplete; the tests never skip silently.
pub fn live_credentials() -> BasicCredentials {
    match BasicCredentials::from_env() {
        Ok(creds) => creds,
        Err(e) => panic!(
            "\n\n\
            LIVE TEST CONFIGURATION ERROR: {}\n\n\
            Live tests require a SuccessFactors tenant. Export:\n\
            \x20 SF_API_SERVER_V2  e.g. https://api17.sapsf.com/odata/v2\n\
            \x20 SF_COMPANY_ID\n\
            \x20 SF_USERNAME\n\
            \x20 SF_PASSWORD\n\n",
            e
        ),
    }
}

/// User id the live tests read.
pub fn live_user_id() -> String {
    std::env::var("SAPSF_TEST_USER").unwrap_or_else(|_| "cgrant".to_string())
}
