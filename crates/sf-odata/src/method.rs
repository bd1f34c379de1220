//! Logical OData V2 verbs and their mapping onto transport verbs.

use std::fmt;
use std::str::FromStr;

use sapsf_client::{Error, RequestMethod};

/// A verb as the OData service understands it.
///
/// `Merge` and `Replace` have no transport verb of their own here; they are
/// sent as `POST` with an `X-HTTP-METHOD` override header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ODataMethod {
    Get,
    Post,
    Put,
    Delete,
    Merge,
    Replace,
}

impl ODataMethod {
    /// Transport verb and optional override header value.
    pub fn transport(self) -> (RequestMethod, Option<&'static str>) {
        match self {
            ODataMethod::Get => (RequestMethod::Get, None),
            ODataMethod::Post => (RequestMethod::Post, None),
            ODataMethod::Put => (RequestMethod::Put, None),
            ODataMethod::Delete => (RequestMethod::Delete, None),
            ODataMethod::Merge => (RequestMethod::Post, Some("MERGE")),
            ODataMethod::Replace => (RequestMethod::Post, Some("REPLACE")),
        }
    }

    /// Upper-case verb name.
    pub fn as_str(self) -> &'static str {
        match self {
            ODataMethod::Get => "GET",
            ODataMethod::Post => "POST",
            ODataMethod::Put => "PUT",
            ODataMethod::Delete => "DELETE",
            ODataMethod::Merge => "MERGE",
            ODataMethod::Replace => "REPLACE",
        }
    }

    /// Returns true if the verb is tunnelled over POST.
    pub fn is_emulated(self) -> bool {
        self.transport().1.is_some()
    }
}

impl fmt::Display for ODataMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ODataMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(ODataMethod::Get),
            "POST" => Ok(ODataMethod::Post),
            "PUT" => Ok(ODataMethod::Put),
            "DELETE" => Ok(ODataMethod::Delete),
            "MERGE" => Ok(ODataMethod::Merge),
            "REPLACE" => Ok(ODataMethod::Replace),
            _ => Err(Error::usage(format!(
                "unsupported HTTP method or OData operation: {}",
                s
            ))),
        }
    }
}
