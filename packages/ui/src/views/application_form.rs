use dioxus::prelude::*;
use model::{Application, ApplicationStatus};

use super::common::{Field, TextAreaField};
use super::ModalOverlay;
use crate::forms::{ApplicationForm, FieldErrors};
use crate::{use_api, use_error_reporter};

/// Add or edit an application in a modal.
///
/// With `existing` set the form starts from that record and saves with an
/// update; otherwise it creates. `on_saved` receives the stored record.
#[component]
pub fn ApplicationFormModal(
    existing: Option<Application>,
    on_saved: EventHandler<Application>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();
    let editing_id = existing.as_ref().map(|a| a.id);

    let mut form = use_signal(|| match &existing {
        Some(application) => ApplicationForm::from_application(application),
        None => ApplicationForm::new(chrono::Local::now().date_naive()),
    });
    let mut errors = use_signal(FieldErrors::default);
    let mut saving = use_signal(|| false);

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
            let result = match editing_id {
                Some(id) => api.applications.update(id, &draft).await,
                None => api.applications.create(&draft).await,
            };
            saving.set(false);
            match result {
                Ok(application) => {
                    reporter.success(if editing_id.is_some() {
                        "Application updated"
                    } else {
                        "Application created"
                    });
                    on_saved.call(application);
                }
                Err(e) => reporter.report(
                    if editing_id.is_some() {
                        "Failed to update application"
                    } else {
                        "Failed to create application"
                    },
                    &e,
                ),
            }
        });
    };

    let current = form();
    let field_errors = errors();
    let error = |name: &str| field_errors.get(name).map(str::to_string);
    let title = if editing_id.is_some() {
        "Edit Application"
    } else {
        "Add New Application"
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            class: "modal-card modal-wide",
            form {
                class: "modal-body",
                onsubmit: handle_submit,
                h2 { class: "modal-title", "{title}" }
                div {
                    class: "form-grid",
                    Field {
                        id: "company_name",
                        label: "Company Name",
                        value: current.company_name.clone(),
                        required: true,
                        error: error("company_name"),
                        on_input: move |v| {
                            form.write().company_name = v;
                            errors.write().clear("company_name");
                        },
                    }
                    Field {
                        id: "job_title",
                        label: "Job Title",
                        value: current.job_title.clone(),
                        required: true,
                        error: error("job_title"),
                        on_input: move |v| {
                            form.write().job_title = v;
                            errors.write().clear("job_title");
                        },
                    }
                    Field {
                        id: "location",
                        label: "Location",
                        value: current.location.clone(),
                        placeholder: "e.g. Berlin or Remote",
                        on_input: move |v| form.write().location = v,
                    }
                    Field {
                        id: "application_date",
                        label: "Application Date",
                        kind: "date",
                        value: current.application_date.clone(),
                        required: true,
                        error: error("application_date"),
                        on_input: move |v| {
                            form.write().application_date = v;
                            errors.write().clear("application_date");
                        },
                    }
                    div {
                        class: "field",
                        label { r#for: "status", "Status" span { class: "field-required", " *" } }
                        select {
                            id: "status",
                            class: "input",
                            value: "{current.status}",
                            onchange: move |evt: FormEvent| {
                                form.write().status = evt.value();
                                errors.write().clear("status");
                            },
                            for status in ApplicationStatus::ALL {
                                option {
                                    value: status.wire_name(),
                                    selected: current.status == status.wire_name(),
                                    "{status.label()}"
                                }
                            }
                        }
                        if let Some(message) = error("status") {
                            p { class: "field-error", "{message}" }
                        }
                    }
                    Field {
                        id: "salary_range",
                        label: "Salary Range",
                        value: current.salary_range.clone(),
                        placeholder: "e.g. 70k - 90k",
                        on_input: move |v| form.write().salary_range = v,
                    }
                    Field {
                        id: "source",
                        label: "Source",
                        value: current.source.clone(),
                        placeholder: "e.g. LinkedIn, referral",
                        on_input: move |v| form.write().source = v,
                    }
                    Field {
                        id: "tech_stack",
                        label: "Tech Stack",
                        value: current.tech_stack.clone(),
                        on_input: move |v| form.write().tech_stack = v,
                    }
                }
                TextAreaField {
                    id: "description",
                    label: "Description",
                    value: current.description.clone(),
                    rows: 4,
                    on_input: move |v| form.write().description = v,
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
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
