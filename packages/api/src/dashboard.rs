//! `/dashboard` aggregate endpoints.

use std::collections::BTreeMap;

use model::{ActivityTrends, DashboardOverview, RecentActivity, StatusSummary};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

pub const DEFAULT_WEEKS: u32 = 12;
pub const DEFAULT_RECENT_LIMIT: u32 = 10;
pub const DEFAULT_TREND_DAYS: u32 = 30;

#[derive(Clone)]
pub struct DashboardApi {
    client: ApiClient,
}

impl DashboardApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn overview(&self) -> Result<DashboardOverview, ApiError> {
        self.client
            .call(ApiRequest::get("/dashboard/overview"))
            .await
    }

    /// Application counts keyed by week start (`YYYY-MM-DD`).
    pub async fn applications_per_week(
        &self,
        weeks: Option<u32>,
    ) -> Result<BTreeMap<String, u64>, ApiError> {
        self.client
            .call(
                ApiRequest::get("/dashboard/applications-per-week")
                    .query("weeks", weeks.unwrap_or(DEFAULT_WEEKS)),
            )
            .await
    }

    pub async fn recent_activities(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<RecentActivity>, ApiError> {
        self.client
            .call(
                ApiRequest::get("/dashboard/recent-activities")
                    .query("limit", limit.unwrap_or(DEFAULT_RECENT_LIMIT)),
            )
            .await
    }

    pub async fn status_summary(&self) -> Result<StatusSummary, ApiError> {
        self.client
            .call(ApiRequest::get("/dashboard/analytics/status-summary"))
            .await
    }

    pub async fn activity_trends(&self, days: Option<u32>) -> Result<ActivityTrends, ApiError> {
        self.client
            .call(
                ApiRequest::get("/dashboard/analytics/activity-trends")
                    .query("days", days.unwrap_or(DEFAULT_TREND_DAYS)),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{FakeIdentity, FakeTransport};
    use std::sync::Arc;

    fn api() -> (DashboardApi, Arc<FakeTransport>) {
        let identity = Arc::new(FakeIdentity::signed_in());
        identity.grant("t");
        let transport = Arc::new(FakeTransport::new());
        let client = ApiClient::new(identity, transport.clone(), vec!["scope".to_string()]);
        (DashboardApi::new(client), transport)
    }

    #[tokio::test]
    async fn test_overview_total_falls_back_to_breakdown() {
        let (api, transport) = api();
        transport.respond(
            200,
            r#"{
                "applicationStatusBreakdown": {"APPLIED": 3, "OFFER": 1},
                "weeklyApplications": {"2024-03-04": 2},
                "recentActivities": []
            }"#,
        );

        let overview = api.overview().await.unwrap();
        assert_eq!(overview.total(), 4);
        assert_eq!(transport.last().path, "/dashboard/overview");
        assert_eq!(transport.last().bearer.as_deref(), Some("t"));
    }

    #[tokio::test]
    async fn test_windowed_endpoints_apply_defaults() {
        let (api, transport) = api();
        transport.respond(200, r#"{"2024-03-04": 2, "2024-02-26": 1}"#);
        transport.respond(200, "[]");
        transport.respond(
            200,
            r#"{"activityTypeBreakdown": {"PHONE_SCREEN": 2}, "attachmentTypeBreakdown": {}}"#,
        );

        let weeks = api.applications_per_week(None).await.unwrap();
        assert_eq!(weeks.keys().next().map(String::as_str), Some("2024-02-26"));
        assert_eq!(transport.last().query[0], ("weeks".to_string(), "12".to_string()));

        api.recent_activities(None).await.unwrap();
        assert_eq!(transport.last().query[0], ("limit".to_string(), "10".to_string()));

        let trends = api.activity_trends(Some(7)).await.unwrap();
        assert_eq!(trends.activity_type_breakdown["PHONE_SCREEN"], 2);
        let sent = transport.last();
        assert_eq!(sent.path, "/dashboard/analytics/activity-trends");
        assert_eq!(sent.query[0], ("days".to_string(), "7".to_string()));
    }

    #[tokio::test]
    async fn test_status_summary() {
        let (api, transport) = api();
        transport.respond(
            200,
            r#"{
                "totalApplications": 4,
                "statusBreakdown": {"Applied": 3, "Offer": 1},
                "statusPercentages": {"Applied": 75.0, "Offer": 25.0}
            }"#,
        );

        let summary = api.status_summary().await.unwrap();
        assert_eq!(summary.total_applications, 4);
        assert_eq!(summary.status_percentages["Offer"], 25.0);
    }
}
