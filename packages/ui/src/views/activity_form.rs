use dioxus::prelude::*;
use model::{Activity, ActivityType, Id, PageRequest, SortDirection};

use super::common::{Field, TextAreaField};
use super::ModalOverlay;
use crate::forms::{ActivityForm, FieldErrors};
use crate::{use_api, use_error_reporter};

/// Applications offered in the picker, newest first.
const PICKER_SIZE: u32 = 100;

/// Log a new activity in a modal.
///
/// The application picker lists the user's applications; `application_id`
/// preselects one, as when opened from a detail page.
#[component]
pub fn ActivityFormModal(
    #[props(default)] application_id: Option<Id>,
    on_saved: EventHandler<Activity>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();

    let mut form = use_signal(|| ActivityForm::new(chrono::Local::now().naive_local(), application_id));
    let mut errors = use_signal(FieldErrors::default);
    let mut saving = use_signal(|| false);

    let picker_api = api.clone();
    let applications = use_resource(move || {
        let api = picker_api.clone();
        async move {
            let request = PageRequest::new(0, PICKER_SIZE)
                .with_sort("applicationDate", SortDirection::Desc);
            match api.applications.list(&request).await {
                Ok(page) => page.content,
                Err(e) => {
                    reporter.report("Failed to load applications", &e);
                    Vec::new()
                }
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = match form.read().validate() {
            Ok(draft) => draft,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        saving.set(true);
        let api = api.clone();
        spawn(async move {
            let result = api.activities.create(&draft).await;
            saving.set(false);
            match result {
                Ok(activity) => {
                    reporter.success("Activity added");
                    on_saved.call(activity);
                }
                Err(e) => reporter.report("Failed to add activity", &e),
            }
        });
    };

    let current = form();
    let field_errors = errors();
    let error = |name: &str| field_errors.get(name).map(str::to_string);
    let options = applications().unwrap_or_default();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            form {
                class: "modal-body",
                onsubmit: handle_submit,
                h2 { class: "modal-title", "Add Activity" }
                div {
                    class: "field",
                    label { r#for: "application_id", "Application" span { class: "field-required", " *" } }
                    select {
                        id: "application_id",
                        class: "input",
                        value: "{current.application_id}",
                        onchange: move |evt: FormEvent| {
                            form.write().application_id = evt.value();
                            errors.write().clear("application_id");
                        },
                        option { value: "", "Select an application" }
                        for application in options {
                            option {
                                key: "{application.id}",
                                value: "{application.id}",
                                selected: current.application_id == application.id.to_string(),
                                "{application.company_name} - {application.job_title}"
                            }
                        }
                    }
                    if let Some(message) = error("application_id") {
                        p { class: "field-error", "{message}" }
                    }
                }
                div {
                    class: "field",
                    label { r#for: "activity_type", "Activity Type" span { class: "field-required", " *" } }
                    select {
                        id: "activity_type",
                        class: "input",
                        value: "{current.activity_type}",
                        onchange: move |evt: FormEvent| {
                            form.write().activity_type = evt.value();
                            errors.write().clear("activity_type");
                        },
                        for kind in ActivityType::ALL {
                            option {
                                value: kind.wire_name(),
                                selected: current.activity_type == kind.wire_name(),
                                "{kind.label()}"
                            }
                        }
                    }
                    if let Some(message) = error("activity_type") {
                        p { class: "field-error", "{message}" }
                    }
                }
                div {
                    class: "form-grid",
                    Field {
                        id: "date_time",
                        label: "Date & Time",
                        kind: "datetime-local",
                        value: current.date_time.clone(),
                        required: true,
                        error: error("date_time"),
                        on_input: move |v| {
                            form.write().date_time = v;
                            errors.write().clear("date_time");
                        },
                    }
                    Field {
                        id: "duration_minutes",
                        label: "Duration (minutes)",
                        kind: "number",
                        value: current.duration_minutes.clone(),
                        error: error("duration_minutes"),
                        on_input: move |v| {
                            form.write().duration_minutes = v;
                            errors.write().clear("duration_minutes");
                        },
                    }
                    Field {
                        id: "activity_location",
                        label: "Location",
                        value: current.location.clone(),
                        placeholder: "e.g. Zoom, Office",
                        on_input: move |v| form.write().location = v,
                    }
                    Field {
                        id: "participants",
                        label: "Participants",
                        value: current.participants.clone(),
                        on_input: move |v| form.write().participants = v,
                    }
                }
                TextAreaField {
                    id: "notes",
                    label: "Notes",
                    value: current.notes.clone(),
                    on_input: move |v| form.write().notes = v,
                }
                div {
                    class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Add Activity" }
                    }
                }
            }
        }
    }
}
