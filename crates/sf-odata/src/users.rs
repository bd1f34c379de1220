//! Request planning for the User entity.
//!
//! Each function returns the exact request the matching
//! [`UserClient`](crate::UserClient) method sends.

use serde::Serialize;
use serde_json::json;

use sapsf_client::Result;

use crate::entity::{entity_key_path, object_body, UPSERT_ENDPOINT, USER_ENTITY_SET};
use crate::operation::{ODataOperation, ODataRequest};
use crate::query::QueryOptions;

/// Status value SuccessFactors uses for an inactive user.
pub const INACTIVE_STATUS: &str = "f";

/// `GET User('<id>')` with `$format=json` and optional `$select`/`$expand`.
pub fn get(user_id: &str, select: &[&str], expand: &[&str]) -> Result<ODataRequest> {
    let path = entity_key_path(USER_ENTITY_SET, user_id)?;
    let options = QueryOptions::new().select(select).expand(expand);
    Ok(ODataRequest::for_operation(ODataOperation::Get, path).query_pairs(options.to_query_pairs()))
}

/// `GET User` with the given query options.
pub fn list(options: &QueryOptions) -> ODataRequest {
    ODataRequest::for_operation(ODataOperation::List, USER_ENTITY_SET)
        .query_pairs(options.to_query_pairs())
}

/// Creation goes through the upsert endpoint.
pub fn create<T: Serialize + ?Sized>(data: &T) -> Result<ODataRequest> {
    upsert(data, None)
}

/// `PUT User('<id>')` when `full_replace`, otherwise MERGE over POST.
pub fn update<T: Serialize + ?Sized>(
    user_id: &str,
    data: &T,
    full_replace: bool,
) -> Result<ODataRequest> {
    let operation = if full_replace {
        ODataOperation::ReplaceAll
    } else {
        ODataOperation::MergePartial
    };
    let path = entity_key_path(USER_ENTITY_SET, user_id)?;
    Ok(ODataRequest::for_operation(operation, path).body(object_body(data)?))
}

/// `POST upsert`, with `purgeType` when given.
pub fn upsert<T: Serialize + ?Sized>(data: &T, purge_type: Option<&str>) -> Result<ODataRequest> {
    let mut request =
        ODataRequest::for_operation(ODataOperation::Upsert, UPSERT_ENDPOINT).body(object_body(data)?);
    if let Some(purge_type) = purge_type.filter(|p| !p.is_empty()) {
        request = request.query("purgeType", purge_type);
    }
    Ok(request)
}

/// Soft delete: a partial update setting `status` to inactive.
pub fn deactivate(user_id: &str) -> Result<ODataRequest> {
    update(user_id, &json!({ "status": INACTIVE_STATUS }), false)
}
