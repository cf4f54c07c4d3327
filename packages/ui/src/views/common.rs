//! Small building blocks shared by the pages.

use dioxus::prelude::*;
use model::ApplicationStatus;

use crate::styling::status_badge_class;

#[component]
pub fn StatusBadge(status: ApplicationStatus) -> Element {
    rsx! {
        span { class: status_badge_class(status), "{status.label()}" }
    }
}

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "state state-loading", "{label}" }
    }
}

#[component]
pub fn LoadError(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "state state-error",
            p { "{message}" }
            button {
                class: "btn btn-outline",
                onclick: move |_| on_retry.call(()),
                "Try again"
            }
        }
    }
}

#[component]
pub fn EmptyState(title: String, #[props(default)] hint: Option<String>) -> Element {
    rsx! {
        div {
            class: "state state-empty",
            p { class: "state-title", "{title}" }
            if let Some(hint) = hint {
                p { class: "state-hint", "{hint}" }
            }
        }
    }
}

/// Labelled single-line input with an inline error.
#[component]
pub fn Field(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] error: Option<String>,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label {
                r#for: "{id}",
                "{label}"
                if required {
                    span { class: "field-required", " *" }
                }
            }
            input {
                id: "{id}",
                class: if error.is_some() { "input input-invalid" } else { "input" },
                r#type: "{kind}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            if let Some(message) = &error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    id: String,
    label: String,
    value: String,
    #[props(default = 3)] rows: u32,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { r#for: "{id}", "{label}" }
            textarea {
                id: "{id}",
                class: "input",
                rows: "{rows}",
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        }
    }
}
