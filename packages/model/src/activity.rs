//! Activities: dated events logged against an application.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::Id;

/// Kind of event recorded for an application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    #[default]
    ApplicationSubmitted,
    PhoneScreen,
    TechnicalInterview,
    BehavioralInterview,
    SystemDesign,
    CodingTest,
    TakeHomeAssignment,
    FinalRound,
    OfferCall,
    Rejection,
    FollowUpEmail,
    NetworkingCoffee,
    InfoSession,
    ReferenceCheck,
    Other,
}

impl ActivityType {
    pub const ALL: [ActivityType; 15] = [
        ActivityType::ApplicationSubmitted,
        ActivityType::PhoneScreen,
        ActivityType::TechnicalInterview,
        ActivityType::BehavioralInterview,
        ActivityType::SystemDesign,
        ActivityType::CodingTest,
        ActivityType::TakeHomeAssignment,
        ActivityType::FinalRound,
        ActivityType::OfferCall,
        ActivityType::Rejection,
        ActivityType::FollowUpEmail,
        ActivityType::NetworkingCoffee,
        ActivityType::InfoSession,
        ActivityType::ReferenceCheck,
        ActivityType::Other,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            ActivityType::ApplicationSubmitted => "APPLICATION_SUBMITTED",
            ActivityType::PhoneScreen => "PHONE_SCREEN",
            ActivityType::TechnicalInterview => "TECHNICAL_INTERVIEW",
            ActivityType::BehavioralInterview => "BEHAVIORAL_INTERVIEW",
            ActivityType::SystemDesign => "SYSTEM_DESIGN",
            ActivityType::CodingTest => "CODING_TEST",
            ActivityType::TakeHomeAssignment => "TAKE_HOME_ASSIGNMENT",
            ActivityType::FinalRound => "FINAL_ROUND",
            ActivityType::OfferCall => "OFFER_CALL",
            ActivityType::Rejection => "REJECTION",
            ActivityType::FollowUpEmail => "FOLLOW_UP_EMAIL",
            ActivityType::NetworkingCoffee => "NETWORKING_COFFEE",
            ActivityType::InfoSession => "INFO_SESSION",
            ActivityType::ReferenceCheck => "REFERENCE_CHECK",
            ActivityType::Other => "OTHER",
        }
    }

    /// Label the backend uses in dashboard feeds.
    pub fn label(self) -> &'static str {
        match self {
            ActivityType::ApplicationSubmitted => "Application Submitted",
            ActivityType::PhoneScreen => "Phone Screen",
            ActivityType::TechnicalInterview => "Technical Interview",
            ActivityType::BehavioralInterview => "Behavioral Interview",
            ActivityType::SystemDesign => "System Design Interview",
            ActivityType::CodingTest => "Coding Test",
            ActivityType::TakeHomeAssignment => "Take Home Assignment",
            ActivityType::FinalRound => "Final Round Interview",
            ActivityType::OfferCall => "Offer Call",
            ActivityType::Rejection => "Rejection",
            ActivityType::FollowUpEmail => "Follow-up Email",
            ActivityType::NetworkingCoffee => "Networking Coffee",
            ActivityType::InfoSession => "Information Session",
            ActivityType::ReferenceCheck => "Reference Check",
            ActivityType::Other => "Other",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.wire_name() == key || t.label().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("Unknown activity type: {s}"))
    }
}

/// Back-reference from an activity to its application, denormalized for display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRef {
    pub id: Id,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_title: String,
}

impl ApplicationRef {
    /// Reference carrying only the id, which is all the backend reads on writes.
    pub fn by_id(id: Id) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// A logged activity as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Id,
    /// Absent when the activity is nested inside its own application.
    #[serde(default)]
    pub application: Option<ApplicationRef>,
    pub r#type: ActivityType,
    pub date_time: NaiveDateTime,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub participants: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

/// Request body for creating or updating an activity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    pub application: ApplicationRef,
    pub r#type: ActivityType,
    pub date_time: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_decode_activity_with_parent() {
        let json = r#"{
            "id": 3,
            "application": {"id": 9, "companyName": "Acme", "jobTitle": "SRE"},
            "type": "CODING_TEST",
            "dateTime": "2024-04-02T15:30:00",
            "durationMinutes": 90
        }"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.r#type, ActivityType::CodingTest);
        assert_eq!(activity.application.as_ref().map(|a| a.id), Some(9));
        assert_eq!(activity.duration_minutes, Some(90));
        assert_eq!(
            activity.date_time,
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap().and_hms_opt(15, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_type_keys() {
        assert_eq!(ActivityType::ALL.len(), 15);
        assert_eq!(ActivityType::from_key("Offer Call"), Some(ActivityType::OfferCall));
        assert_eq!(ActivityType::from_key("FOLLOW_UP_EMAIL"), Some(ActivityType::FollowUpEmail));
        assert_eq!(ActivityType::SystemDesign.to_string(), "System Design Interview");
    }

    #[test]
    fn test_draft_references_parent_by_id() {
        let draft = ActivityDraft {
            application: ApplicationRef::by_id(12),
            r#type: ActivityType::PhoneScreen,
            date_time: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(9, 0, 0).unwrap(),
            notes: None,
            location: Some("Zoom".into()),
            participants: None,
            duration_minutes: None,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["application"]["id"], 12);
        assert_eq!(value["type"], "PHONE_SCREEN");
        assert_eq!(value["dateTime"], "2024-01-05T09:00:00");
        assert_eq!(value["location"], "Zoom");
        assert!(value.get("notes").is_none());
    }
}
