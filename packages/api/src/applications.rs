//! `/applications` endpoints.

use model::{Application, ApplicationDraft, ApplicationStatus, Id, Page, PageRequest};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

#[derive(Clone)]
pub struct ApplicationsApi {
    client: ApiClient,
}

impl ApplicationsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// One page of the user's applications. A blank search is not sent.
    pub async fn list(&self, request: &PageRequest) -> Result<Page<Application>, ApiError> {
        let mut call = ApiRequest::get("/applications");
        for (key, value) in request.query_pairs() {
            call = call.query(key, value);
        }
        self.client.call(call).await
    }

    pub async fn get(&self, id: Id) -> Result<Application, ApiError> {
        self.client
            .call(ApiRequest::get(format!("/applications/{id}")))
            .await
    }

    pub async fn create(&self, draft: &ApplicationDraft) -> Result<Application, ApiError> {
        self.client
            .call(ApiRequest::post("/applications").json(draft)?)
            .await
    }

    pub async fn update(&self, id: Id, draft: &ApplicationDraft) -> Result<Application, ApiError> {
        self.client
            .call(ApiRequest::put(format!("/applications/{id}")).json(draft)?)
            .await
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client
            .send(ApiRequest::delete(format!("/applications/{id}")))
            .await
            .map(|_| ())
    }

    pub async fn list_by_status(
        &self,
        status: ApplicationStatus,
    ) -> Result<Vec<Application>, ApiError> {
        self.client
            .call(ApiRequest::get(format!(
                "/applications/status/{}",
                status.wire_name()
            )))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{FakeIdentity, FakeTransport};
    use crate::http::Method;
    use chrono::NaiveDate;
    use model::SortDirection;
    use std::sync::Arc;

    const PAGE: &str = r#"{
        "content": [{
            "id": 7,
            "userId": "oid-1",
            "companyName": "Acme",
            "jobTitle": "Backend Engineer",
            "applicationDate": "2024-03-01",
            "status": "PHONE_SCREEN"
        }],
        "totalElements": 11,
        "totalPages": 2,
        "size": 10,
        "number": 0
    }"#;

    fn api() -> (ApplicationsApi, Arc<FakeTransport>) {
        let identity = Arc::new(FakeIdentity::signed_in());
        identity.grant("t");
        let transport = Arc::new(FakeTransport::new());
        let client = ApiClient::new(identity, transport.clone(), vec!["scope".to_string()]);
        (ApplicationsApi::new(client), transport)
    }

    fn query(request: &ApiRequest) -> Vec<(&str, &str)> {
        request
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[tokio::test]
    async fn test_list_sends_paging_and_search() {
        let (api, transport) = api();
        transport.respond(200, PAGE);

        let request = PageRequest::new(1, 25)
            .with_sort("companyName", SortDirection::Asc)
            .with_search("acme");
        let page = api.list(&request).await.unwrap();

        assert_eq!(page.total_elements, 11);
        assert_eq!(page.content[0].company_name, "Acme");
        assert_eq!(page.content[0].status, ApplicationStatus::PhoneScreen);
        assert!(page.content[0].activities.is_empty());

        let sent = transport.last();
        assert_eq!(sent.path, "/applications");
        assert_eq!(
            query(&sent),
            vec![
                ("page", "1"),
                ("size", "25"),
                ("sortBy", "companyName"),
                ("sortDir", "asc"),
                ("search", "acme"),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_omits_blank_search() {
        let (api, transport) = api();
        transport.respond(200, PAGE);

        api.list(&PageRequest::default().with_search("   "))
            .await
            .unwrap();

        assert!(transport.last().query.iter().all(|(k, _)| k != "search"));
    }

    #[tokio::test]
    async fn test_create_and_update_send_draft() {
        let (api, transport) = api();
        let body = r#"{"id":3,"companyName":"Initech","jobTitle":"SRE","applicationDate":"2024-05-02","status":"APPLIED"}"#;
        transport.respond(201, body);
        transport.respond(200, body);

        let draft = ApplicationDraft {
            company_name: "Initech".to_string(),
            job_title: "SRE".to_string(),
            location: None,
            tech_stack: Some("Rust".to_string()),
            application_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            status: ApplicationStatus::Applied,
            salary_range: None,
            source: None,
            description: None,
        };

        let created = api.create(&draft).await.unwrap();
        assert_eq!(created.id, 3);
        let sent = transport.last();
        assert_eq!(sent.method, Method::Post);
        let body = sent.body.unwrap();
        assert_eq!(body["companyName"], "Initech");
        assert_eq!(body["applicationDate"], "2024-05-02");
        assert_eq!(body["status"], "APPLIED");
        assert!(body.get("location").is_none());

        api.update(3, &draft).await.unwrap();
        let sent = transport.last();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.path, "/applications/3");
    }

    #[tokio::test]
    async fn test_delete_and_get_paths() {
        let (api, transport) = api();
        transport.respond(204, "");
        transport.respond(404, r#"{"message":"Application not found"}"#);

        api.delete(9).await.unwrap();
        assert_eq!(transport.last().path, "/applications/9");

        let err = api.get(9).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Application not found");
    }

    #[tokio::test]
    async fn test_list_by_status_uses_wire_name() {
        let (api, transport) = api();
        transport.respond(200, "[]");

        let rows = api
            .list_by_status(ApplicationStatus::TechnicalInterview)
            .await
            .unwrap();
        assert!(rows.is_empty());
        assert_eq!(
            transport.last().path,
            "/applications/status/TECHNICAL_INTERVIEW"
        );
    }
}
