//! # Read-only dashboard aggregates
//!
//! | Struct | Endpoint |
//! |--------|----------|
//! | [`DashboardOverview`] | `/dashboard/overview` |
//! | [`RecentActivity`] | `/dashboard/recent-activities` |
//! | [`StatusSummary`] | `/dashboard/analytics/status-summary` |
//! | [`ActivityTrends`] | `/dashboard/analytics/activity-trends` |
//!
//! Count maps are `BTreeMap`s so week keys (`2024-03-04`) iterate in
//! chronological order. Status keys may be wire names or labels; use
//! [`DashboardOverview::status_counts`] to fold them onto the enumeration.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::application::{null_as_empty, ApplicationStatus};
use crate::Id;

/// Recent activity entry embedded in the overview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewActivity {
    pub id: Id,
    /// Activity type label, e.g. "Phone Screen".
    pub r#type: String,
    pub date_time: NaiveDateTime,
    pub company_name: String,
    pub job_title: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    /// Explicit total from the backend; the breakdown sum stands in when absent.
    #[serde(default)]
    pub total_applications: Option<u64>,
    #[serde(default)]
    pub application_status_breakdown: BTreeMap<String, u64>,
    #[serde(default)]
    pub weekly_applications: BTreeMap<String, u64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recent_activities: Vec<OverviewActivity>,
    #[serde(default)]
    pub activity_type_breakdown: BTreeMap<String, u64>,
    #[serde(default)]
    pub total_activities: Option<u64>,
    #[serde(default)]
    pub total_attachments: Option<u64>,
}

impl DashboardOverview {
    /// Sum of every count in the status breakdown.
    pub fn breakdown_total(&self) -> u64 {
        self.application_status_breakdown.values().sum()
    }

    /// Total applications, preferring the backend's explicit figure.
    pub fn total(&self) -> u64 {
        self.total_applications.unwrap_or_else(|| self.breakdown_total())
    }

    /// Breakdown folded onto the status enumeration. Unknown keys are dropped.
    pub fn status_counts(&self) -> BTreeMap<ApplicationStatus, u64> {
        let mut counts = BTreeMap::new();
        for (key, count) in &self.application_status_breakdown {
            if let Some(status) = ApplicationStatus::from_key(key) {
                *counts.entry(status).or_insert(0) += count;
            }
        }
        counts
    }
}

/// Entry of the `/dashboard/recent-activities` feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: Id,
    pub r#type: String,
    pub date_time: NaiveDateTime,
    #[serde(default)]
    pub notes: Option<String>,
    pub company_name: String,
    pub job_title: String,
    #[serde(default)]
    pub application_id: Option<Id>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub total_applications: u64,
    #[serde(default)]
    pub status_breakdown: BTreeMap<String, u64>,
    /// Percent of total per status, rounded to one decimal place.
    #[serde(default)]
    pub status_percentages: BTreeMap<String, f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTrends {
    #[serde(default)]
    pub activity_type_breakdown: BTreeMap<String, u64>,
    #[serde(default)]
    pub attachment_type_breakdown: BTreeMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_falls_back_to_breakdown_sum() {
        let json = r#"{"applicationStatusBreakdown": {"APPLIED": 3, "OFFER": 1}}"#;
        let overview: DashboardOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.total_applications, None);
        assert_eq!(overview.total(), 4);
    }

    #[test]
    fn test_explicit_total_wins() {
        let json = r#"{"totalApplications": 10, "applicationStatusBreakdown": {"Applied": 3}}"#;
        let overview: DashboardOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.total(), 10);
        assert_eq!(overview.breakdown_total(), 3);
    }

    #[test]
    fn test_status_counts_merge_labels_and_names() {
        let json = r#"{
            "applicationStatusBreakdown": {"Phone Screen": 2, "PHONE_SCREEN": 1, "Mystery": 5},
            "weeklyApplications": {"2024-03-11": 1, "2024-03-04": 2},
            "recentActivities": [
                {"id": 1, "type": "Phone Screen", "dateTime": "2024-03-12T10:00:00",
                 "companyName": "Acme", "jobTitle": "Dev"}
            ]
        }"#;
        let overview: DashboardOverview = serde_json::from_str(json).unwrap();
        let counts = overview.status_counts();
        assert_eq!(counts.get(&ApplicationStatus::PhoneScreen), Some(&3));
        assert_eq!(counts.len(), 1);

        let weeks: Vec<_> = overview.weekly_applications.keys().cloned().collect();
        assert_eq!(weeks, vec!["2024-03-04", "2024-03-11"]);
        assert_eq!(overview.recent_activities[0].company_name, "Acme");
    }

    #[test]
    fn test_decode_status_summary() {
        let json = r#"{
            "totalApplications": 3,
            "statusBreakdown": {"Applied": 2, "Offer": 1},
            "statusPercentages": {"Applied": 66.7, "Offer": 33.3}
        }"#;
        let summary: StatusSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_applications, 3);
        assert_eq!(summary.status_percentages.get("Offer"), Some(&33.3));
    }
}
