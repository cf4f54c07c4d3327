use dioxus::prelude::*;

use super::common::{EmptyState, LoadError, Loading};
use crate::icons::{FaBriefcase, FaCalendarCheck, FaChartLine, FaTrophy};
use crate::stats::{status_slices, weekly_bars, StatCards};
use crate::styling::chart_color;
use crate::{use_api, use_error_reporter, Icon};

/// Overview of the job search: stat cards, status breakdown, weekly
/// applications and the latest activities.
#[component]
pub fn DashboardView(on_open_applications: EventHandler<()>) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();

    let mut overview = use_resource(move || {
        let api = api.clone();
        async move {
            let result = api.dashboard.overview().await;
            if let Err(e) = &result {
                reporter.report("Failed to load dashboard", e);
            }
            result.map_err(|e| e.to_string())
        }
    });

    let data = match overview() {
        None => return rsx! { Loading { label: "Loading dashboard..." } },
        Some(Err(message)) => {
            return rsx! {
                LoadError { message: message, on_retry: move |_| overview.restart() }
            };
        }
        Some(Ok(data)) => data,
    };

    let cards = StatCards::from_overview(&data);
    let slices = status_slices(&data);
    let bars = weekly_bars(&data);

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { class: "page-title", "Dashboard" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_open_applications.call(()),
                    "View Applications"
                }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Total Applications", value: cards.total, tone: "tone-blue",
                    Icon { width: 20, height: 20, icon: FaBriefcase }
                }
                StatCard { label: "Active Applications", value: cards.active, tone: "tone-yellow",
                    Icon { width: 20, height: 20, icon: FaChartLine }
                }
                StatCard { label: "Offers", value: cards.offers, tone: "tone-green",
                    Icon { width: 20, height: 20, icon: FaTrophy }
                }
                StatCard { label: "Recent Activities", value: cards.recent_activities, tone: "tone-purple",
                    Icon { width: 20, height: 20, icon: FaCalendarCheck }
                }
            }

            div {
                class: "chart-grid",
                section {
                    class: "card",
                    h2 { class: "card-title", "Application Status" }
                    if slices.is_empty() {
                        EmptyState { title: "No applications yet" }
                    } else {
                        ul {
                            class: "status-chart",
                            for (index, slice) in slices.into_iter().enumerate() {
                                li {
                                    key: "{slice.status.wire_name()}",
                                    class: "status-row",
                                    span {
                                        class: "status-swatch",
                                        style: "background-color: {chart_color(index)}",
                                    }
                                    span { class: "status-label", "{slice.status.label()}" }
                                    div {
                                        class: "status-track",
                                        div {
                                            class: "status-fill",
                                            style: "width: {slice.percent}%; background-color: {chart_color(index)}",
                                        }
                                    }
                                    span { class: "status-count", "{slice.count} ({slice.percent}%)" }
                                }
                            }
                        }
                    }
                }
                section {
                    class: "card",
                    h2 { class: "card-title", "Applications per Week" }
                    if bars.is_empty() {
                        EmptyState { title: "No applications in recent weeks" }
                    } else {
                        div {
                            class: "week-chart",
                            for bar in bars {
                                div {
                                    key: "{bar.label}",
                                    class: "week-column",
                                    title: "{bar.count} applications",
                                    span { class: "week-count", "{bar.count}" }
                                    div { class: "week-bar", style: "height: {bar.height}%" }
                                    span { class: "week-label", "{bar.label}" }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Recent Activities" }
                if data.recent_activities.is_empty() {
                    EmptyState {
                        title: "No recent activities",
                        hint: "Activities you log will show up here.".to_string(),
                    }
                } else {
                    ul {
                        class: "activity-list",
                        for activity in data.recent_activities.iter() {
                            li {
                                key: "{activity.id}",
                                class: "activity-row",
                                div {
                                    class: "activity-main",
                                    p { class: "activity-title", {activity.r#type.clone()} }
                                    p { class: "activity-sub", "{activity.company_name} - {activity.job_title}" }
                                }
                                span {
                                    class: "activity-date",
                                    {activity.date_time.format("%b %-d, %Y %H:%M").to_string()}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: u64, tone: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card stat-card",
            div { class: "stat-icon {tone}", {children} }
            div {
                p { class: "stat-label", "{label}" }
                p { class: "stat-value", "{value}" }
            }
        }
    }
}
