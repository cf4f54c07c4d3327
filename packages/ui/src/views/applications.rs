use dioxus::prelude::*;
use model::{Application, Id, Page};

use super::common::{EmptyState, LoadError, Loading, StatusBadge};
use super::{ApplicationFormModal, ConfirmDialog};
use crate::icons::{FaMagnifyingGlass, FaPlus, FaTrash};
use crate::pagination::{page_summary, ListQuery, PAGE_SIZES};
use crate::rows::apply_page_delete;
use crate::{use_api, use_error_reporter, Icon};

/// Sortable columns, as (backend field, header).
const COLUMNS: [(&str, &str); 4] = [
    ("companyName", "Company"),
    ("jobTitle", "Position"),
    ("status", "Status"),
    ("applicationDate", "Applied"),
];

/// Paginated, searchable list of the user's applications.
#[component]
pub fn ApplicationsView(on_open: EventHandler<Id>) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();

    let mut query = use_signal(ListQuery::default);
    let mut page = use_signal(|| Option::<Page<Application>>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut show_create = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Application>::None);
    let mut deleting = use_signal(|| false);

    let list_api = api.clone();
    let mut loader = use_resource(move || {
        let api = list_api.clone();
        let request = query().to_request();
        async move {
            match api.applications.list(&request).await {
                Ok(result) => {
                    load_error.set(None);
                    page.set(Some(result));
                }
                Err(e) => {
                    reporter.report("Failed to load applications", &e);
                    load_error.set(Some(e.to_string()));
                }
            }
        }
    });

    let confirm_delete = move |_| {
        let Some(target) = pending_delete() else {
            return;
        };
        deleting.set(true);
        let api = api.clone();
        spawn(async move {
            let outcome = api.applications.delete(target.id).await;
            deleting.set(false);
            pending_delete.set(None);
            let removed = match page.write().as_mut() {
                Some(current) => apply_page_delete(current, target.id, &outcome),
                None => false,
            };
            match outcome {
                Ok(()) => {
                    reporter.success(format!("Deleted {}", target.company_name));
                    let stepped_back = match page.peek().as_ref() {
                        Some(current) => query.write().step_back_if_emptied(current),
                        None => false,
                    };
                    if !removed && !stepped_back {
                        loader.restart();
                    }
                }
                Err(e) => reporter.report("Failed to delete application", &e),
            }
        });
    };

    let current_query = query();
    let body = match (page(), load_error()) {
        (None, Some(message)) => rsx! {
            LoadError { message: message, on_retry: move |_| loader.restart() }
        },
        (None, None) => rsx! { Loading { label: "Loading applications..." } },
        (Some(current), _) if current.content.is_empty() => rsx! {
            EmptyState {
                title: "No applications found",
                hint: if current_query.search.trim().is_empty() {
                    Some("Add your first application to start tracking.".to_string())
                } else {
                    Some("Try a different search term.".to_string())
                },
            }
        },
        (Some(current), _) => {
            let summary = page_summary(&current);
            let has_previous = current.has_previous();
            let has_next = current.has_next();
            let number = current.number;
            let position = format!("Page {} of {}", number + 1, current.total_pages.max(1));
            rsx! {
                table {
                    class: "table",
                    thead {
                        tr {
                            for (field, header) in COLUMNS {
                                th {
                                    key: "{field}",
                                    class: "sortable",
                                    onclick: move |_| query.write().toggle_sort(field),
                                    "{header}"
                                    if current_query.sort_by == field {
                                        span {
                                            class: "sort-indicator",
                                            if current_query.sort_dir == model::SortDirection::Asc { " ▲" } else { " ▼" }
                                        }
                                    }
                                }
                            }
                            th { "Location" }
                            th { class: "actions", "" }
                        }
                    }
                    tbody {
                        for application in current.content {
                            ApplicationRow {
                                key: "{application.id}",
                                application: application,
                                on_open: on_open,
                                on_delete: move |target| pending_delete.set(Some(target)),
                            }
                        }
                    }
                }
                div {
                    class: "pager",
                    span { class: "pager-summary", "{summary}" }
                    div {
                        class: "pager-controls",
                        button {
                            class: "btn btn-outline",
                            disabled: !has_previous,
                            onclick: move |_| query.write().set_page(number.saturating_sub(1)),
                            "Previous"
                        }
                        span { class: "pager-page", "{position}" }
                        button {
                            class: "btn btn-outline",
                            disabled: !has_next,
                            onclick: move |_| query.write().set_page(number + 1),
                            "Next"
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { class: "page-title", "Applications" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_create.set(true),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    " Add Application"
                }
            }

            div {
                class: "toolbar",
                div {
                    class: "search",
                    Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                    input {
                        class: "input",
                        r#type: "search",
                        placeholder: "Search by company or position",
                        value: "{current_query.search}",
                        oninput: move |evt: FormEvent| query.write().set_search(evt.value()),
                    }
                }
                label {
                    class: "page-size",
                    "Show "
                    select {
                        class: "input",
                        value: "{current_query.size}",
                        onchange: move |evt: FormEvent| {
                            if let Ok(size) = evt.value().parse::<u32>() {
                                query.write().set_page_size(size);
                            }
                        },
                        for size in PAGE_SIZES {
                            option {
                                value: "{size}",
                                selected: size == current_query.size,
                                "{size}"
                            }
                        }
                    }
                }
            }

            div { class: "card", {body} }

            if show_create() {
                ApplicationFormModal {
                    existing: None::<Application>,
                    on_saved: move |_| {
                        show_create.set(false);
                        loader.restart();
                    },
                    on_close: move |_| show_create.set(false),
                }
            }

            if let Some(target) = pending_delete() {
                ConfirmDialog {
                    title: "Delete application",
                    message: format!(
                        "Delete the application to {} for {}? Its activities and attachments go with it.",
                        target.company_name, target.job_title
                    ),
                    busy: deleting(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn ApplicationRow(
    application: Application,
    on_open: EventHandler<Id>,
    on_delete: EventHandler<Application>,
) -> Element {
    let id = application.id;
    let target = application.clone();
    rsx! {
        tr {
            class: "row-link",
            onclick: move |_| on_open.call(id),
            td { class: "strong", "{application.company_name}" }
            td { "{application.job_title}" }
            td { StatusBadge { status: application.status } }
            td { {application.application_date.format("%b %-d, %Y").to_string()} }
            td { "{application.location_or_remote()}" }
            td {
                class: "actions",
                button {
                    class: "btn-icon",
                    title: "Delete",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_delete.call(target.clone());
                    },
                    Icon { width: 14, height: 14, icon: FaTrash }
                }
            }
        }
    }
}
