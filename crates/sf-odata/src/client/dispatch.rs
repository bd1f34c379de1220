use serde_json::Value;
use tracing::instrument;

use sapsf_client::{Error, Result};

use crate::method::ODataMethod;
use crate::operation::ODataRequest;

impl super::UserClient {
    /// Send a planned request.
    ///
    /// MERGE and REPLACE go out as `POST` with `X-HTTP-METHOD` set. The body,
    /// when present, is sent as JSON. A 2xx with no body yields `Value::Null`.
    ///
    /// The endpoint is relative to the service root. An absolute URL is a
    /// usage error and nothing is sent.
    #[instrument(skip(self, request), fields(method = %request.method, endpoint = %request.endpoint))]
    pub async fn dispatch(&self, request: ODataRequest) -> Result<Value> {
        let ODataRequest {
            method,
            endpoint,
            query,
            body,
        } = request;

        if endpoint.contains("://") {
            return Err(Error::usage(format!(
                "endpoint must be relative to the service root, got '{endpoint}'"
            )));
        }

        let (transport, override_verb) = method.transport();
        let mut builder = self.client.request(transport, &endpoint).query_pairs(query);
        if let Some(verb) = override_verb {
            builder = builder.method_override(verb);
        }
        if let Some(body) = body {
            builder = builder.json_value(body);
        }

        self.client.send_json(builder).await
    }

    /// Send a request named by a verb string such as `"MERGE"` or `"get"`.
    ///
    /// An unknown verb or an absolute endpoint is a usage error and nothing is sent.
    pub async fn dispatch_raw(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<Value>,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        let method: ODataMethod = method.parse()?;
        let mut request = ODataRequest::new(method, endpoint).query_pairs(params.iter().copied());
        if let Some(body) = body {
            request = request.body(body);
        }
        self.dispatch(request).await
    }
}
