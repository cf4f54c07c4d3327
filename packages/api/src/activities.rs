//! `/activities` endpoints.

use model::{Activity, ActivityDraft, Id};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Default bound for the current user's activity list.
pub const DEFAULT_USER_ACTIVITY_LIMIT: u32 = 20;

#[derive(Clone)]
pub struct ActivitiesApi {
    client: ApiClient,
}

impl ActivitiesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The signed-in user's most recent activities, newest first.
    pub async fn list_for_user(&self, limit: Option<u32>) -> Result<Vec<Activity>, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_USER_ACTIVITY_LIMIT);
        self.client
            .call(ApiRequest::get("/activities/user").query("limit", limit))
            .await
    }

    pub async fn list_for_application(&self, application_id: Id) -> Result<Vec<Activity>, ApiError> {
        self.client
            .call(ApiRequest::get(format!(
                "/activities/application/{application_id}"
            )))
            .await
    }

    pub async fn create(&self, draft: &ActivityDraft) -> Result<Activity, ApiError> {
        self.client
            .call(ApiRequest::post("/activities").json(draft)?)
            .await
    }

    pub async fn update(&self, id: Id, draft: &ActivityDraft) -> Result<Activity, ApiError> {
        self.client
            .call(ApiRequest::put(format!("/activities/{id}")).json(draft)?)
            .await
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client
            .send(ApiRequest::delete(format!("/activities/{id}")))
            .await
            .map(|_| ())
    }
}
