use dioxus::prelude::*;

use crate::LoginButton;

/// Landing page for visitors without an account.
#[component]
pub fn LoginView() -> Element {
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "brand", "CareerLog" }
                p { class: "muted", "Track every application, interview and offer in one place." }
                LoginButton { class: "btn btn-primary btn-block" }
            }
        }
    }
}
