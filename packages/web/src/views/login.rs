//! Sign-in pages.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::{AuthCallbackView, LoginView};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in
    use_effect(move || {
        if auth().account.is_some() {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! { LoginView {} }
}

/// Redirect target registered with the identity provider.
#[component]
pub fn AuthCallback(code: String, state: String, error: String) -> Element {
    let nav = use_navigator();

    rsx! {
        AuthCallbackView {
            code: code,
            state: state,
            error: error,
            on_done: move |_| {
                nav.replace(Route::Dashboard {});
            },
        }
    }
}
