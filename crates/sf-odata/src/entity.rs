//! Entity sets, key paths and write bodies.

use serde::Serialize;
use serde_json::Value;

use sapsf_client::security::odata;
use sapsf_client::{Error, Result};

/// The User entity set.
pub const USER_ENTITY_SET: &str = "User";

/// The SuccessFactors upsert function import.
pub const UPSERT_ENDPOINT: &str = "upsert";

/// A schemaless User record, forwarded as-is.
pub type UserRecord = serde_json::Map<String, Value>;

/// Path addressing a single entity: `EntitySet('<key>')`.
///
/// The key is percent-encoded. Empty keys, keys containing a single quote
/// and keys with control characters are rejected.
///
/// ```rust
/// use sapsf_odata::entity_key_path;
///
/// assert_eq!(entity_key_path("User", "cgrant").unwrap(), "User('cgrant')");
/// assert!(entity_key_path("User", "o'brien").is_err());
/// ```
pub fn entity_key_path(entity_set: &str, key: &str) -> Result<String> {
    odata::key_predicate_path(entity_set, key).ok_or_else(|| {
        if !odata::is_safe_identifier(entity_set) {
            Error::usage(format!("invalid entity set name: {:?}", entity_set))
        } else if key.is_empty() {
            Error::usage(format!("empty key for {}", entity_set))
        } else {
            Error::usage(format!("invalid key for {}: {:?}", entity_set, key))
        }
    })
}

/// Serialize a write body, which must be a JSON object.
pub(crate) fn object_body<T: Serialize + ?Sized>(data: &T) -> Result<Value> {
    let value = serde_json::to_value(data)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(Error::usage(format!(
            "entity body must be a JSON object, got {}",
            json_type(&value)
        )))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
