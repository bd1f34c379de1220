use serde::Serialize;
use serde_json::{json, Value};
use tracing::instrument;

use sapsf_client::Result;

use crate::query::QueryOptions;
use crate::users::{self, INACTIVE_STATUS};

impl super::UserClient {
    /// Fetch one user: `GET User('<user_id>')?$format=json`.
    ///
    /// `select` and `expand` are sent as `$select`/`$expand` when non-empty.
    /// The id is validated and percent-encoded; an id containing a single
    /// quote is rejected before any request is made.
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: &str, select: &[&str], expand: &[&str]) -> Result<Value> {
        self.dispatch(users::get(user_id, select, expand)?).await
    }

    /// Query the User collection.
    ///
    /// `__next` links in the response are returned untouched.
    #[instrument(skip(self))]
    pub async fn list_users(&self, options: &QueryOptions) -> Result<Value> {
        self.dispatch(users::list(options)).await
    }

    /// Create a user.
    ///
    /// SuccessFactors creates users through the upsert endpoint, so this is
    /// [`upsert_user`](Self::upsert_user) without a purge type.
    #[instrument(skip(self, data))]
    pub async fn create_user<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        self.upsert_user(data, None).await
    }

    /// Update a user.
    ///
    /// With `full_replace` this is a `PUT` to `User('<user_id>')`. Otherwise it is
    /// a partial update sent as `POST` with `X-HTTP-METHOD: MERGE`.
    #[instrument(skip(self, data))]
    pub async fn update_user<T: Serialize + ?Sized>(
        &self,
        user_id: &str,
        data: &T,
        full_replace: bool,
    ) -> Result<Value> {
        self.dispatch(users::update(user_id, data, full_replace)?).await
    }

    /// `POST upsert` with the record as the body.
    ///
    /// `purge_type` (e.g. `"full"`) is sent as the `purgeType` query parameter.
    #[instrument(skip(self, data))]
    pub async fn upsert_user<T: Serialize + ?Sized>(
        &self,
        data: &T,
        purge_type: Option<&str>,
    ) -> Result<Value> {
        self.dispatch(users::upsert(data, purge_type)?).await
    }

    /// Deactivate a user.
    ///
    /// The API has no hard delete for users. This sends the same partial update
    /// as `update_user(user_id, {"status": "f"}, false)`.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &str) -> Result<Value> {
        self.update_user(user_id, &json!({ "status": INACTIVE_STATUS }), false)
            .await
    }
}
