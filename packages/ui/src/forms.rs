//! # Form state and presence validation
//!
//! Forms hold raw input strings as typed. [`ApplicationForm::validate`] and
//! [`ActivityForm::validate`] check that required fields are present and turn
//! the input into a request body; anything else is left to the backend.
//! Blank optional fields are sent as absent.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use model::{
    ActivityDraft, ActivityType, Application, ApplicationDraft, ApplicationRef, ApplicationStatus,
    Id,
};

/// Per-field messages, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Add/edit application form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationForm {
    pub company_name: String,
    pub job_title: String,
    pub location: String,
    pub tech_stack: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub application_date: String,
    /// Status wire name.
    pub status: String,
    pub salary_range: String,
    pub source: String,
    pub description: String,
}

impl ApplicationForm {
    /// Empty form dated `today`, status Applied.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            application_date: today.format("%Y-%m-%d").to_string(),
            status: ApplicationStatus::Applied.wire_name().to_string(),
            ..Self::default()
        }
    }

    pub fn from_application(application: &Application) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            company_name: application.company_name.clone(),
            job_title: application.job_title.clone(),
            location: text(&application.location),
            tech_stack: text(&application.tech_stack),
            application_date: application.application_date.format("%Y-%m-%d").to_string(),
            status: application.status.wire_name().to_string(),
            salary_range: text(&application.salary_range),
            source: text(&application.source),
            description: text(&application.description),
        }
    }

    pub fn validate(&self) -> Result<ApplicationDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.company_name.trim().is_empty() {
            errors.add("company_name", "Company name is required");
        }
        if self.job_title.trim().is_empty() {
            errors.add("job_title", "Job title is required");
        }
        let date = match self.application_date.trim() {
            "" => {
                errors.add("application_date", "Application date is required");
                None
            }
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add("application_date", "Application date is not a valid date");
                    None
                }
            },
        };
        let status = ApplicationStatus::from_key(self.status.trim());
        if status.is_none() {
            errors.add("status", "Status is required");
        }

        match (date, status) {
            (Some(application_date), Some(status)) if errors.is_empty() => Ok(ApplicationDraft {
                company_name: self.company_name.trim().to_string(),
                job_title: self.job_title.trim().to_string(),
                location: optional(&self.location),
                tech_stack: optional(&self.tech_stack),
                application_date,
                status,
                salary_range: optional(&self.salary_range),
                source: optional(&self.source),
                description: optional(&self.description),
            }),
            _ => Err(errors),
        }
    }
}

/// Add activity form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityForm {
    /// Selected application id, empty when none is selected.
    pub application_id: String,
    /// Activity type wire name.
    pub activity_type: String,
    /// `YYYY-MM-DDTHH:MM`, as produced by a datetime-local input.
    pub date_time: String,
    pub notes: String,
    pub location: String,
    pub participants: String,
    pub duration_minutes: String,
}

impl ActivityForm {
    /// Form for an activity submitted now, optionally preset to one
    /// application as when opened from its detail page.
    pub fn new(now: NaiveDateTime, application_id: Option<Id>) -> Self {
        Self {
            application_id: application_id.map(|id| id.to_string()).unwrap_or_default(),
            activity_type: ActivityType::ApplicationSubmitted.wire_name().to_string(),
            date_time: now.format("%Y-%m-%dT%H:%M").to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<ActivityDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let application_id = self.application_id.trim().parse::<Id>().ok();
        if application_id.is_none() {
            errors.add("application_id", "Please select an application");
        }
        let activity_type = ActivityType::from_key(self.activity_type.trim());
        if activity_type.is_none() {
            errors.add("activity_type", "Activity type is required");
        }
        let date_time = match self.date_time.trim() {
            "" => {
                errors.add("date_time", "Date and time is required");
                None
            }
            raw => match parse_local_date_time(raw) {
                Some(dt) => Some(dt),
                None => {
                    errors.add("date_time", "Date and time is not valid");
                    None
                }
            },
        };
        let duration_minutes = match self.duration_minutes.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(minutes) => Some(minutes),
                Err(_) => {
                    errors.add("duration_minutes", "Duration must be a whole number of minutes");
                    None
                }
            },
        };

        match (application_id, activity_type, date_time) {
            (Some(id), Some(r#type), Some(date_time)) if errors.is_empty() => Ok(ActivityDraft {
                application: ApplicationRef::by_id(id),
                r#type,
                date_time,
                notes: optional(&self.notes),
                location: optional(&self.location),
                participants: optional(&self.participants),
                duration_minutes,
            }),
            _ => Err(errors),
        }
    }
}

/// Accepts datetime-local values with or without seconds.
fn parse_local_date_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_activity() -> ActivityForm {
        ActivityForm {
            application_id: "7".to_string(),
            activity_type: "PHONE_SCREEN".to_string(),
            date_time: "2024-03-05T09:30".to_string(),
            duration_minutes: "45".to_string(),
            notes: "  ".to_string(),
            ..ActivityForm::default()
        }
    }

    #[test]
    fn test_empty_application_form_lists_every_required_field() {
        let errors = ApplicationForm::default().validate().unwrap_err();
        assert_eq!(errors.get("company_name"), Some("Company name is required"));
        assert_eq!(errors.get("job_title"), Some("Job title is required"));
        assert_eq!(
            errors.get("application_date"),
            Some("Application date is required")
        );
        assert_eq!(errors.get("status"), Some("Status is required"));
    }

    #[test]
    fn test_application_form_builds_draft() {
        let mut form = ApplicationForm::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        form.company_name = " Initech ".to_string();
        form.job_title = "SRE".to_string();
        form.source = "LinkedIn".to_string();

        let draft = form.validate().unwrap();
        assert_eq!(draft.company_name, "Initech");
        assert_eq!(draft.status, ApplicationStatus::Applied);
        assert_eq!(draft.source.as_deref(), Some("LinkedIn"));
        assert_eq!(draft.location, None);
    }

    #[test]
    fn test_application_form_round_trips_existing_record() {
        let application: Application = serde_json::from_str(
            r#"{"id":3,"companyName":"Acme","jobTitle":"Engineer","applicationDate":"2024-01-15","status":"FINAL_ROUND","location":"Berlin"}"#,
        )
        .unwrap();
        let form = ApplicationForm::from_application(&application);
        assert_eq!(form.status, "FINAL_ROUND");
        assert_eq!(form.validate().unwrap(), application.to_draft());
    }

    #[test]
    fn test_activity_form_requires_application() {
        let mut form = filled_activity();
        form.application_id.clear();

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("application_id"),
            Some("Please select an application")
        );
        assert_eq!(errors.get("activity_type"), None);
    }

    #[test]
    fn test_activity_form_required_messages() {
        let errors = ActivityForm::default().validate().unwrap_err();
        assert_eq!(errors.get("activity_type"), Some("Activity type is required"));
        assert_eq!(errors.get("date_time"), Some("Date and time is required"));
    }

    #[test]
    fn test_activity_form_builds_draft() {
        let draft = filled_activity().validate().unwrap();
        assert_eq!(draft.application.id, 7);
        assert_eq!(draft.r#type, ActivityType::PhoneScreen);
        assert_eq!(draft.date_time.format("%H:%M").to_string(), "09:30");
        assert_eq!(draft.duration_minutes, Some(45));
        assert_eq!(draft.notes, None);
    }

    #[test]
    fn test_activity_form_rejects_bad_duration() {
        let mut form = filled_activity();
        form.duration_minutes = "an hour".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.get("duration_minutes").is_some());
    }

    #[test]
    fn test_new_form_presets_type_and_time() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 31)
            .unwrap();
        let form = ActivityForm::new(now, Some(12));
        assert_eq!(form.application_id, "12");
        assert_eq!(form.date_time, "2024-03-05T14:07");

        let draft = form.validate().unwrap();
        assert_eq!(draft.r#type, ActivityType::ApplicationSubmitted);

        let errors = ActivityForm::new(now, None).validate().unwrap_err();
        assert_eq!(
            errors.get("application_id"),
            Some("Please select an application")
        );
    }
}
