//! Colour classes for statuses and activity types.

use model::{ActivityType, ApplicationStatus};

/// Badge class for an application status.
pub fn status_badge_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => "badge badge-blue",
        ApplicationStatus::PhoneScreen => "badge badge-yellow",
        ApplicationStatus::TechnicalInterview => "badge badge-purple",
        ApplicationStatus::BehavioralInterview => "badge badge-green",
        ApplicationStatus::FinalRound => "badge badge-indigo",
        ApplicationStatus::Offer => "badge badge-emerald",
        ApplicationStatus::Rejected => "badge badge-red",
        ApplicationStatus::Withdrawn => "badge badge-gray",
    }
}

/// Icon colour class for an activity row. Only the interview stages stand out.
pub fn activity_icon_class(kind: ActivityType) -> &'static str {
    match kind {
        ActivityType::PhoneScreen => "activity-icon tone-blue",
        ActivityType::TechnicalInterview => "activity-icon tone-purple",
        ActivityType::BehavioralInterview => "activity-icon tone-green",
        _ => "activity-icon tone-gray",
    }
}

/// Chart palette, cycled by slice index.
pub const CHART_COLORS: [&str; 6] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899",
];

pub fn chart_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}
