//! Enumerated operations and fully planned requests.
//!
//! An [`ODataRequest`] is a pure value. Building one never touches the network,
//! so the verb-emulation policy and query parameters can be checked directly.

use std::fmt;

use serde_json::Value;

use sapsf_client::RequestMethod;

use crate::method::ODataMethod;

/// Entity-level intent, each tied to exactly one logical verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ODataOperation {
    /// Read one entity by key.
    Get,
    /// Read an entity collection.
    List,
    /// Create through the upsert endpoint.
    Create,
    /// Replace every field of an entity.
    ReplaceAll,
    /// Update the supplied fields only.
    MergePartial,
    /// Insert or update through the upsert endpoint.
    Upsert,
    /// Soft delete: a partial update marking the entity inactive.
    Deactivate,
}

impl ODataOperation {
    /// Logical verb used for this operation.
    pub fn method(self) -> ODataMethod {
        match self {
            ODataOperation::Get | ODataOperation::List => ODataMethod::Get,
            ODataOperation::Create | ODataOperation::Upsert => ODataMethod::Post,
            ODataOperation::ReplaceAll => ODataMethod::Put,
            ODataOperation::MergePartial | ODataOperation::Deactivate => ODataMethod::Merge,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ODataOperation::Get => "get",
            ODataOperation::List => "list",
            ODataOperation::Create => "create",
            ODataOperation::ReplaceAll => "replace_all",
            ODataOperation::MergePartial => "merge_partial",
            ODataOperation::Upsert => "upsert",
            ODataOperation::Deactivate => "deactivate",
        }
    }
}

impl fmt::Display for ODataOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready for dispatch: logical verb, endpoint, query and body.
#[derive(Debug, Clone, PartialEq)]
pub struct ODataRequest {
    pub(crate) method: ODataMethod,
    pub(crate) endpoint: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<Value>,
}

impl ODataRequest {
    /// Create a request with no query parameters and no body.
    ///
    /// The endpoint is relative to the service root and is not validated here.
    pub fn new(method: ODataMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Create a request using the verb of `operation`.
    pub fn for_operation(operation: ODataOperation, endpoint: impl Into<String>) -> Self {
        Self::new(operation.method(), endpoint)
    }

    /// Append one query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append query parameters.
    pub fn query_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Attach a JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> ODataMethod {
        self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn json_body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Transport verb and `X-HTTP-METHOD` value, if any.
    pub fn transport(&self) -> (RequestMethod, Option<&'static str>) {
        self.method.transport()
    }

    /// Query string as sent on the wire (form-encoded).
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.query)
            .finish()
    }
}
