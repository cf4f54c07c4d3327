//! # Job application records
//!
//! [`Application`] is the record the backend returns for `/applications`
//! endpoints, [`ApplicationDraft`] is the body sent on create and update.
//! Both carry an [`ApplicationStatus`], a closed enumeration that travels as
//! its SCREAMING_SNAKE_CASE name and renders with a human label.
//!
//! Aggregates such as the dashboard status breakdown key their counts by the
//! label ("Phone Screen") rather than the wire name, so
//! [`ApplicationStatus::from_key`] accepts either form.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::activity::Activity;
use crate::attachment::Attachment;
use crate::Id;

/// Where an application stands in the hiring pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    PhoneScreen,
    TechnicalInterview,
    BehavioralInterview,
    FinalRound,
    Offer,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 8] = [
        ApplicationStatus::Applied,
        ApplicationStatus::PhoneScreen,
        ApplicationStatus::TechnicalInterview,
        ApplicationStatus::BehavioralInterview,
        ApplicationStatus::FinalRound,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
        ApplicationStatus::Withdrawn,
    ];

    /// Name used on the wire and in `/applications/status/{status}`.
    pub fn wire_name(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "APPLIED",
            ApplicationStatus::PhoneScreen => "PHONE_SCREEN",
            ApplicationStatus::TechnicalInterview => "TECHNICAL_INTERVIEW",
            ApplicationStatus::BehavioralInterview => "BEHAVIORAL_INTERVIEW",
            ApplicationStatus::FinalRound => "FINAL_ROUND",
            ApplicationStatus::Offer => "OFFER",
            ApplicationStatus::Rejected => "REJECTED",
            ApplicationStatus::Withdrawn => "WITHDRAWN",
        }
    }

    /// Human-readable label, as the backend uses in aggregate maps.
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::PhoneScreen => "Phone Screen",
            ApplicationStatus::TechnicalInterview => "Technical Interview",
            ApplicationStatus::BehavioralInterview => "Behavioral Interview",
            ApplicationStatus::FinalRound => "Final Round",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Withdrawn => "Withdrawn",
        }
    }

    /// Still in progress: neither decided nor abandoned.
    pub fn is_active(self) -> bool {
        !matches!(
            self,
            ApplicationStatus::Offer | ApplicationStatus::Rejected | ApplicationStatus::Withdrawn
        )
    }

    /// Resolve either a wire name (`FINAL_ROUND`) or a label (`Final Round`).
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.wire_name() == key || s.label().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("Unknown application status: {s}"))
    }
}

/// A tracked job application as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Id,
    #[serde(default)]
    pub user_id: Option<String>,
    pub company_name: String,
    pub job_title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<String>,
    pub application_date: NaiveDate,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub activities: Vec<Activity>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attachments: Vec<Attachment>,
}

impl Application {
    /// Location for list display; remote roles carry none.
    pub fn location_or_remote(&self) -> &str {
        self.location.as_deref().filter(|l| !l.is_empty()).unwrap_or("Remote")
    }

    /// Copy the editable fields into a draft, e.g. to prefill the edit form.
    pub fn to_draft(&self) -> ApplicationDraft {
        ApplicationDraft {
            company_name: self.company_name.clone(),
            job_title: self.job_title.clone(),
            location: self.location.clone(),
            tech_stack: self.tech_stack.clone(),
            application_date: self.application_date,
            status: self.status,
            salary_range: self.salary_range.clone(),
            source: self.source.clone(),
            description: self.description.clone(),
        }
    }
}

/// Request body for creating or updating an application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub company_name: String,
    pub job_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    pub application_date: NaiveDate,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Backend collections come back as `null` when lazily unloaded.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_keys() {
        assert_eq!(
            ApplicationStatus::from_key("PHONE_SCREEN"),
            Some(ApplicationStatus::PhoneScreen)
        );
        assert_eq!(
            ApplicationStatus::from_key("Phone Screen"),
            Some(ApplicationStatus::PhoneScreen)
        );
        assert_eq!(ApplicationStatus::from_key("offer"), Some(ApplicationStatus::Offer));
        assert_eq!(ApplicationStatus::from_key("HIRED"), None);
        assert!("nope".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_active_statuses() {
        let active: Vec<_> = ApplicationStatus::ALL
            .into_iter()
            .filter(|s| s.is_active())
            .map(|s| s.label())
            .collect();
        assert_eq!(
            active,
            vec![
                "Applied",
                "Phone Screen",
                "Technical Interview",
                "Behavioral Interview",
                "Final Round"
            ]
        );
    }

    #[test]
    fn test_decode_backend_application() {
        let json = r#"{
            "id": 7,
            "userId": "abc",
            "companyName": "Acme",
            "jobTitle": "Engineer",
            "location": null,
            "applicationDate": "2024-03-01",
            "status": "TECHNICAL_INTERVIEW",
            "activities": null
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.id, 7);
        assert_eq!(app.status, ApplicationStatus::TechnicalInterview);
        assert_eq!(app.application_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(app.activities.is_empty());
        assert!(app.attachments.is_empty());
        assert_eq!(app.location_or_remote(), "Remote");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"id":1,"companyName":"A","jobTitle":"B","applicationDate":"2024-01-01","status":"HIRED"}"#;
        assert!(serde_json::from_str::<Application>(json).is_err());
    }

    #[test]
    fn test_draft_omits_empty_optionals() {
        let draft = ApplicationDraft {
            company_name: "Acme".into(),
            job_title: "Engineer".into(),
            location: None,
            tech_stack: Some("Rust".into()),
            application_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            status: ApplicationStatus::Applied,
            salary_range: None,
            source: None,
            description: None,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["companyName"], "Acme");
        assert_eq!(value["applicationDate"], "2024-05-02");
        assert_eq!(value["status"], "APPLIED");
        assert_eq!(value["techStack"], "Rust");
        assert!(value.get("location").is_none());
    }
}
