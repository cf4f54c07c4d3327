use dioxus::prelude::*;
use model::{Activity, Application, Attachment, Id};

use super::common::{EmptyState, LoadError, Loading, StatusBadge};
use super::{ActivityFormModal, ActivityItem, ApplicationFormModal, ConfirmDialog};
use crate::icons::{FaArrowLeft, FaPaperclip, FaPenToSquare, FaPlus, FaTrash};
use crate::rows::{apply_delete, upsert, DetailRecords};
use crate::{use_api, use_error_reporter, Icon};

/// What the pending confirmation would delete.
#[derive(Clone, PartialEq)]
enum DeleteTarget {
    Application,
    Activity(Id),
    Attachment(Id),
}

/// One application with its activities and attachments.
#[component]
pub fn ApplicationDetailView(
    id: Id,
    /// Called after the application was deleted, or from the back link.
    on_back: EventHandler<()>,
) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();

    let mut records = use_signal(DetailRecords::default);
    let mut load_error = use_signal(|| Option::<String>::None);

    // Follow route parameter changes
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
        records.write().follow(id);
        load_error.set(None);
    }

    let mut editing = use_signal(|| false);
    let mut adding_activity = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<DeleteTarget>::None);
    let mut deleting = use_signal(|| false);

    let load_api = api.clone();
    let mut loader = use_resource(move || {
        let api = load_api.clone();
        let id = id_signal();
        async move {
            match api.applications.get(id).await {
                Ok(found) => {
                    load_error.set(None);
                    records.write().application = Some(found);
                }
                Err(e) => {
                    reporter.report("Failed to load application", &e);
                    load_error.set(Some(e.to_string()));
                    return;
                }
            }
            match api.activities.list_for_application(id).await {
                Ok(rows) => records.write().activities = rows,
                Err(e) => reporter.report("Failed to load activities", &e),
            }
            match api.attachments.list_for_application(id).await {
                Ok(rows) => records.write().attachments = rows,
                Err(e) => reporter.report("Failed to load attachments", &e),
            }
        }
    });

    let confirm_delete = move |_| {
        let Some(target) = pending_delete() else {
            return;
        };
        let id = id_signal();
        deleting.set(true);
        let api = api.clone();
        spawn(async move {
            match target {
                DeleteTarget::Application => match api.applications.delete(id).await {
                    Ok(()) => {
                        reporter.success("Application deleted");
                        on_back.call(());
                    }
                    Err(e) => reporter.report("Failed to delete application", &e),
                },
                DeleteTarget::Activity(activity_id) => {
                    let outcome = api.activities.delete(activity_id).await;
                    apply_delete(&mut records.write().activities, activity_id, &outcome);
                    match outcome {
                        Ok(()) => reporter.success("Activity deleted"),
                        Err(e) => reporter.report("Failed to delete activity", &e),
                    }
                }
                DeleteTarget::Attachment(attachment_id) => {
                    let outcome = api.attachments.delete(attachment_id).await;
                    apply_delete(&mut records.write().attachments, attachment_id, &outcome);
                    match outcome {
                        Ok(()) => reporter.success("Attachment deleted"),
                        Err(e) => reporter.report("Failed to delete attachment", &e),
                    }
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let (current, activities, attachments) = {
        let loaded = records.read();
        (
            loaded.application.clone(),
            loaded.activities.clone(),
            loaded.attachments.clone(),
        )
    };
    let Some(current) = current else {
        return match load_error() {
            Some(message) => rsx! {
                LoadError { message: message, on_retry: move |_| loader.restart() }
            },
            None => rsx! { Loading { label: "Loading application..." } },
        };
    };

    let confirm_message = match pending_delete() {
        Some(DeleteTarget::Application) => format!(
            "Delete the application to {}? Its activities and attachments go with it.",
            current.company_name
        ),
        Some(DeleteTarget::Activity(_)) => "Delete this activity?".to_string(),
        Some(DeleteTarget::Attachment(_)) => "Delete this attachment?".to_string(),
        None => String::new(),
    };

    rsx! {
        div {
            class: "page",
            button {
                class: "link-back",
                onclick: move |_| on_back.call(()),
                Icon { width: 12, height: 12, icon: FaArrowLeft }
                " Back to applications"
            }

            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "{current.company_name}" }
                    p { class: "page-subtitle", "{current.job_title}" }
                }
                div {
                    class: "header-actions",
                    StatusBadge { status: current.status }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| editing.set(true),
                        Icon { width: 14, height: 14, icon: FaPenToSquare }
                        " Edit"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| pending_delete.set(Some(DeleteTarget::Application)),
                        Icon { width: 14, height: 14, icon: FaTrash }
                        " Delete"
                    }
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Details" }
                dl {
                    class: "details",
                    Detail { label: "Location", value: current.location_or_remote().to_string() }
                    Detail { label: "Applied", value: current.application_date.format("%B %-d, %Y").to_string() }
                    Detail { label: "Salary Range", value: current.salary_range.clone().unwrap_or_default() }
                    Detail { label: "Source", value: current.source.clone().unwrap_or_default() }
                    Detail { label: "Tech Stack", value: current.tech_stack.clone().unwrap_or_default() }
                }
                if let Some(description) = current.description.clone() {
                    p { class: "description", "{description}" }
                }
            }

            section {
                class: "card",
                div {
                    class: "card-header",
                    h2 { class: "card-title", "Activities" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| adding_activity.set(true),
                        Icon { width: 14, height: 14, icon: FaPlus }
                        " Add Activity"
                    }
                }
                if activities.is_empty() {
                    EmptyState { title: "No activities yet" }
                } else {
                    ul {
                        class: "activity-list",
                        for activity in activities {
                            ActivityItem {
                                key: "{activity.id}",
                                activity: activity,
                                show_application: false,
                                on_delete: move |activity_id| {
                                    pending_delete.set(Some(DeleteTarget::Activity(activity_id)))
                                },
                            }
                        }
                    }
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Attachments" }
                if attachments.is_empty() {
                    EmptyState { title: "No attachments" }
                } else {
                    ul {
                        class: "attachment-list",
                        for attachment in attachments {
                            AttachmentItem {
                                key: "{attachment.id}",
                                attachment: attachment,
                                on_delete: move |attachment_id| {
                                    pending_delete.set(Some(DeleteTarget::Attachment(attachment_id)))
                                },
                            }
                        }
                    }
                }
            }

            if editing() {
                ApplicationFormModal {
                    existing: Some(current.clone()),
                    on_saved: move |saved: Application| {
                        editing.set(false);
                        records.write().application = Some(saved);
                    },
                    on_close: move |_| editing.set(false),
                }
            }

            if adding_activity() {
                ActivityFormModal {
                    application_id: Some(current.id),
                    on_saved: move |saved: Activity| {
                        adding_activity.set(false);
                        upsert(&mut records.write().activities, saved);
                    },
                    on_close: move |_| adding_activity.set(false),
                }
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    title: "Confirm delete",
                    message: confirm_message,
                    busy: deleting(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn Detail(label: String, value: String) -> Element {
    if value.trim().is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            class: "detail",
            dt { "{label}" }
            dd { "{value}" }
        }
    }
}

#[component]
fn AttachmentItem(attachment: Attachment, on_delete: EventHandler<Id>) -> Element {
    let id = attachment.id;
    let name = attachment
        .original_file_name
        .clone()
        .unwrap_or_else(|| attachment.file_name.clone());
    let kind = attachment.r#type.map(|t| t.label()).unwrap_or("Other");
    let size = attachment.display_size().unwrap_or_default();

    rsx! {
        li {
            class: "attachment-row",
            Icon { width: 14, height: 14, icon: FaPaperclip }
            a {
                class: "attachment-name",
                href: "{attachment.blob_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{name}"
            }
            span { class: "attachment-meta", "{kind}" }
            if !size.is_empty() {
                span { class: "attachment-meta", "{size}" }
            }
            span {
                class: "attachment-meta",
                {attachment.uploaded_at.format("%b %-d, %Y").to_string()}
            }
            button {
                class: "btn-icon",
                title: "Delete",
                onclick: move |_| on_delete.call(id),
                Icon { width: 14, height: 14, icon: FaTrash }
            }
        }
    }
}
