//! Figures the dashboard derives from [`DashboardOverview`].

use chrono::NaiveDate;
use model::{ApplicationStatus, DashboardOverview};

/// The four stat cards at the top of the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCards {
    pub total: u64,
    pub active: u64,
    pub offers: u64,
    pub recent_activities: u64,
}

impl StatCards {
    pub fn from_overview(overview: &DashboardOverview) -> Self {
        let counts = overview.status_counts();
        Self {
            total: overview.total(),
            active: counts
                .iter()
                .filter(|(status, _)| status.is_active())
                .map(|(_, count)| count)
                .sum(),
            offers: counts.get(&ApplicationStatus::Offer).copied().unwrap_or(0),
            recent_activities: overview.recent_activities.len() as u64,
        }
    }
}

/// One slice of the status chart.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusSlice {
    pub status: ApplicationStatus,
    pub count: u64,
    /// Whole percent of all counted applications.
    pub percent: u32,
}

/// Non-empty statuses in pipeline order.
pub fn status_slices(overview: &DashboardOverview) -> Vec<StatusSlice> {
    let counts = overview.status_counts();
    let total: u64 = counts.values().sum();
    counts
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(status, count)| StatusSlice {
            status,
            count,
            percent: ((count as f64 / total as f64) * 100.0).round() as u32,
        })
        .collect()
}

/// One bar of the weekly chart.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekBar {
    /// Short label such as "Mar 4".
    pub label: String,
    pub count: u64,
    /// Height relative to the tallest bar, 0 to 100.
    pub height: u32,
}

/// Weekly counts sorted by week start. Keys that are not dates keep their
/// text as label and sort after the dated weeks.
pub fn weekly_bars(overview: &DashboardOverview) -> Vec<WeekBar> {
    let mut weeks: Vec<(Option<NaiveDate>, &String, u64)> = overview
        .weekly_applications
        .iter()
        .map(|(key, count)| (NaiveDate::parse_from_str(key, "%Y-%m-%d").ok(), key, *count))
        .collect();
    weeks.sort_by(|a, b| match (a.0, b.0) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.1.cmp(b.1),
    });

    let max = weeks.iter().map(|w| w.2).max().unwrap_or(0).max(1);
    weeks
        .into_iter()
        .map(|(date, key, count)| WeekBar {
            label: date
                .map(|d| d.format("%b %-d").to_string())
                .unwrap_or_else(|| key.clone()),
            count,
            height: ((count as f64 / max as f64) * 100.0).round() as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overview(json: &str) -> DashboardOverview {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_total_is_breakdown_sum_without_explicit_total() {
        let data = overview(r#"{"applicationStatusBreakdown": {"APPLIED": 3, "OFFER": 1}}"#);
        let cards = StatCards::from_overview(&data);
        assert_eq!(cards.total, 4);
        assert_eq!(cards.active, 3);
        assert_eq!(cards.offers, 1);
        assert_eq!(cards.recent_activities, 0);
    }

    #[test]
    fn test_explicit_total_wins_and_labels_count() {
        let data = overview(
            r#"{
                "totalApplications": 10,
                "applicationStatusBreakdown": {"Phone Screen": 2, "Final Round": 1, "Rejected": 4, "Offer": 2},
                "recentActivities": [
                    {"id": 1, "type": "Phone Screen", "dateTime": "2024-03-04T10:00:00", "companyName": "Acme", "jobTitle": "Dev"}
                ]
            }"#,
        );
        let cards = StatCards::from_overview(&data);
        assert_eq!(cards.total, 10);
        assert_eq!(cards.active, 3);
        assert_eq!(cards.offers, 2);
        assert_eq!(cards.recent_activities, 1);
    }

    #[test]
    fn test_status_slices_percentages() {
        let data = overview(r#"{"applicationStatusBreakdown": {"APPLIED": 3, "OFFER": 1, "REJECTED": 0}}"#);
        let slices = status_slices(&data);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].status, ApplicationStatus::Applied);
        assert_eq!(slices[0].percent, 75);
        assert_eq!(slices[1].percent, 25);
    }

    #[test]
    fn test_weekly_bars_sorted_by_week() {
        let data = overview(
            r#"{"weeklyApplications": {"2024-03-11": 1, "2024-02-26": 4, "2024-03-04": 2}}"#,
        );
        let bars = weekly_bars(&data);
        let labels: Vec<_> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Feb 26", "Mar 4", "Mar 11"]);
        assert_eq!(bars[0].height, 100);
        assert_eq!(bars[2].height, 25);
    }

    #[test]
    fn test_empty_overview() {
        let data = DashboardOverview::default();
        assert_eq!(StatCards::from_overview(&data).total, 0);
        assert!(status_slices(&data).is_empty());
        assert!(weekly_bars(&data).is_empty());
    }
}
