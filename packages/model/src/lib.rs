pub mod activity;
pub mod application;
pub mod attachment;
pub mod config;
pub mod dashboard;
pub mod page;

pub use activity::{Activity, ActivityDraft, ActivityType, ApplicationRef};
pub use application::{Application, ApplicationDraft, ApplicationStatus};
pub use attachment::{Attachment, AttachmentDraft, AttachmentType};
pub use config::CareerLogConfig;
pub use dashboard::{ActivityTrends, DashboardOverview, OverviewActivity, RecentActivity, StatusSummary};
pub use page::{Page, PageRequest, SortDirection};

/// Backend identifier type shared by every entity.
pub type Id = i64;

/// Turns a wire name such as `PHONE_SCREEN` into `PHONE SCREEN`.
pub fn humanize(wire: &str) -> String {
    wire.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_replaces_every_underscore() {
        assert_eq!(humanize("TAKE_HOME_ASSIGNMENT"), "TAKE HOME ASSIGNMENT");
        assert_eq!(humanize("OFFER"), "OFFER");
    }
}
