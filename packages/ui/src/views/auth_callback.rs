use dioxus::prelude::*;

use crate::{use_auth, use_services, AuthState, LoginButton};

/// Completes the sign-in redirect.
///
/// The identity provider sends the browser back here with `code` and `state`
/// (or `error`). On success the account is stored and `on_done` fires.
#[component]
pub fn AuthCallbackView(
    code: String,
    state: String,
    #[props(default)] error: String,
    on_done: EventHandler<()>,
) -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let mut failure = use_signal(|| {
        if !error.is_empty() {
            tracing::warn!("Sign-in was rejected: {}", error);
            Some(error.clone())
        } else if code.is_empty() || state.is_empty() {
            Some("The sign-in response was incomplete".to_string())
        } else {
            None
        }
    });

    use_hook(move || {
        if failure.peek().is_some() {
            return;
        }
        let identity = services.identity.clone();
        spawn(async move {
            match identity.complete_login(&code, &state).await {
                Ok(account) => {
                    tracing::info!("Signed in as {}", account.username);
                    auth.set(AuthState {
                        account: Some(account),
                        session_expired: false,
                    });
                    on_done.call(());
                }
                Err(e) => {
                    tracing::error!("Sign-in failed: {}", e);
                    failure.set(Some(e.to_string()));
                }
            }
        });
    });

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                match failure() {
                    Some(message) => rsx! {
                        h1 { class: "auth-title", "Sign-in failed" }
                        p { class: "field-error", "{message}" }
                        LoginButton { label: "Try again", class: "btn btn-primary btn-block" }
                    },
                    None => rsx! {
                        p { class: "muted", "Signing you in..." }
                    },
                }
            }
        }
    }
}
