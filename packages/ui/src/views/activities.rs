use dioxus::prelude::*;
use model::{Activity, Id};

use super::common::{EmptyState, LoadError, Loading};
use super::{ActivityFormModal, ConfirmDialog};
use crate::icons::{FaCalendarDay, FaClock, FaLocationDot, FaPlus, FaTrash, FaUsers};
use crate::rows::{apply_delete, upsert};
use crate::styling::activity_icon_class;
use crate::{use_api, use_error_reporter, Icon};

/// Activities listed on the activities page.
const ACTIVITY_LIMIT: u32 = 50;

/// The user's latest activities across all applications.
#[component]
pub fn ActivitiesView() -> Element {
    let api = use_api();
    let reporter = use_error_reporter();

    let mut rows = use_signal(|| Option::<Vec<Activity>>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut adding = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Id>::None);
    let mut deleting = use_signal(|| false);

    let list_api = api.clone();
    let mut loader = use_resource(move || {
        let api = list_api.clone();
        async move {
            match api.activities.list_for_user(Some(ACTIVITY_LIMIT)).await {
                Ok(found) => {
                    load_error.set(None);
                    rows.set(Some(found));
                }
                Err(e) => {
                    reporter.report("Failed to load activities", &e);
                    load_error.set(Some(e.to_string()));
                }
            }
        }
    });

    let confirm_delete = move |_| {
        let Some(id) = pending_delete() else {
            return;
        };
        deleting.set(true);
        let api = api.clone();
        spawn(async move {
            let outcome = api.activities.delete(id).await;
            if let Some(current) = rows.write().as_mut() {
                apply_delete(current, id, &outcome);
            }
            deleting.set(false);
            pending_delete.set(None);
            match outcome {
                Ok(()) => reporter.success("Activity deleted"),
                Err(e) => reporter.report("Failed to delete activity", &e),
            }
        });
    };

    let body = match (rows(), load_error()) {
        (None, Some(message)) => rsx! {
            LoadError { message: message, on_retry: move |_| loader.restart() }
        },
        (None, None) => rsx! { Loading { label: "Loading activities..." } },
        (Some(list), _) if list.is_empty() => rsx! {
            EmptyState {
                title: "No activities yet",
                hint: "Log calls, interviews and follow-ups to keep track of each application.".to_string(),
            }
        },
        (Some(list), _) => rsx! {
            ul {
                class: "activity-list",
                for activity in list {
                    ActivityItem {
                        key: "{activity.id}",
                        activity: activity,
                        on_delete: move |id| pending_delete.set(Some(id)),
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { class: "page-title", "Activities" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| adding.set(true),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    " Add Activity"
                }
            }

            div { class: "card", {body} }

            if adding() {
                ActivityFormModal {
                    on_saved: move |saved: Activity| {
                        adding.set(false);
                        if let Some(current) = rows.write().as_mut() {
                            upsert(current, saved);
                        }
                    },
                    on_close: move |_| adding.set(false),
                }
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    title: "Delete activity",
                    message: "Delete this activity?",
                    busy: deleting(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

/// One activity row with its type icon, schedule details and notes.
#[component]
pub fn ActivityItem(
    activity: Activity,
    #[props(default = true)] show_application: bool,
    on_delete: EventHandler<Id>,
) -> Element {
    let id = activity.id;
    let application = activity
        .application
        .as_ref()
        .filter(|a| show_application && !a.company_name.is_empty())
        .map(|a| format!("{} - {}", a.company_name, a.job_title));

    rsx! {
        li {
            class: "activity-row",
            div {
                class: activity_icon_class(activity.r#type),
                Icon { width: 14, height: 14, icon: FaCalendarDay }
            }
            div {
                class: "activity-main",
                p { class: "activity-title", {activity.r#type.label()} }
                if let Some(application) = application {
                    p { class: "activity-sub", "{application}" }
                }
                div {
                    class: "activity-meta",
                    span {
                        Icon { width: 12, height: 12, icon: FaClock }
                        " "
                        {activity.date_time.format("%b %-d, %Y %H:%M").to_string()}
                    }
                    if let Some(minutes) = activity.duration_minutes {
                        span { "{minutes} min" }
                    }
                    if let Some(location) = activity.location.clone() {
                        span {
                            Icon { width: 12, height: 12, icon: FaLocationDot }
                            " {location}"
                        }
                    }
                    if let Some(participants) = activity.participants.clone() {
                        span {
                            Icon { width: 12, height: 12, icon: FaUsers }
                            " {participants}"
                        }
                    }
                }
                if let Some(notes) = activity.notes.clone() {
                    p { class: "activity-notes", "{notes}" }
                }
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
