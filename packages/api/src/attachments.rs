//! `/attachments` endpoints. Only metadata travels through here; the file
//! bytes live in blob storage.

use std::collections::BTreeMap;

use model::{Attachment, AttachmentDraft, AttachmentType, Id};
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

pub const DEFAULT_USER_ATTACHMENT_LIMIT: u32 = 50;

#[derive(Deserialize)]
struct Count {
    count: u64,
}

#[derive(Clone)]
pub struct AttachmentsApi {
    client: ApiClient,
}

impl AttachmentsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_for_application(
        &self,
        application_id: Id,
    ) -> Result<Vec<Attachment>, ApiError> {
        self.client
            .call(ApiRequest::get(format!(
                "/attachments/application/{application_id}"
            )))
            .await
    }

    pub async fn list_for_user(&self, limit: Option<u32>) -> Result<Vec<Attachment>, ApiError> {
        self.client
            .call(
                ApiRequest::get("/attachments/user")
                    .query("limit", limit.unwrap_or(DEFAULT_USER_ATTACHMENT_LIMIT)),
            )
            .await
    }

    pub async fn get(&self, id: Id) -> Result<Attachment, ApiError> {
        self.client
            .call(ApiRequest::get(format!("/attachments/{id}")))
            .await
    }

    pub async fn create(&self, draft: &AttachmentDraft) -> Result<Attachment, ApiError> {
        self.client
            .call(ApiRequest::post("/attachments").json(draft)?)
            .await
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client
            .send(ApiRequest::delete(format!("/attachments/{id}")))
            .await
            .map(|_| ())
    }

    pub async fn list_for_application_by_type(
        &self,
        application_id: Id,
        kind: AttachmentType,
    ) -> Result<Vec<Attachment>, ApiError> {
        self.client
            .call(ApiRequest::get(format!(
                "/attachments/application/{application_id}/type/{}",
                kind.wire_name()
            )))
            .await
    }

    /// Attachment counts per type for the signed-in user.
    pub async fn type_breakdown(&self) -> Result<BTreeMap<String, u64>, ApiError> {
        self.client
            .call(ApiRequest::get("/attachments/analytics/type-breakdown"))
            .await
    }

    pub async fn count_for_application(&self, application_id: Id) -> Result<u64, ApiError> {
        let count: Count = self
            .client
            .call(ApiRequest::get(format!(
                "/attachments/application/{application_id}/count"
            )))
            .await?;
        Ok(count.count)
    }
}
