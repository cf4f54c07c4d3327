use dioxus::prelude::*;
use model::Id;
use ui::views::{ActivitiesView, ApplicationDetailView, ApplicationsView, DashboardView, ProfileView};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        DashboardView {
            on_open_applications: move |_| {
                nav.push(Route::Applications {});
            },
        }
    }
}

#[component]
pub fn Applications() -> Element {
    let nav = use_navigator();
    rsx! {
        ApplicationsView {
            on_open: move |id: Id| {
                nav.push(Route::ApplicationDetail { id });
            },
        }
    }
}

#[component]
pub fn ApplicationDetail(id: Id) -> Element {
    let nav = use_navigator();
    rsx! {
        ApplicationDetailView {
            id: id,
            on_back: move |_| {
                nav.push(Route::Applications {});
            },
        }
    }
}

#[component]
pub fn Activities() -> Element {
    rsx! { ActivitiesView {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ProfileView {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Page not found" }
                p { class: "muted", "Nothing lives at /{path}." }
                Link { class: "btn btn-primary", to: Route::Dashboard {}, "Go to dashboard" }
            }
        }
    }
}
