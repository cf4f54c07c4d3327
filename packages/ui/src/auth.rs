//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] builds the identity provider and the API clients from the
//! configuration and shares them through the context. Views reach the
//! backend through [`use_api`] and report failures through
//! [`use_error_reporter`], which turns [`ApiError::AuthExpired`] into an
//! interactive sign-in.

use std::sync::Arc;

use api::auth::SessionStore;
use api::{
    Account, ApiClient, ApiError, CareerLogApi, IdentityProvider, OAuthConfig, OAuthIdentity,
};
use dioxus::prelude::*;
use model::CareerLogConfig;

use crate::toast::{use_toast, Toaster};

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub account: Option<Account>,
    /// Set when a call could not be authorized silently; the provider then
    /// starts an interactive sign-in.
    pub session_expired: bool,
}

/// Identity provider and API clients shared by every view.
#[derive(Clone)]
pub struct Services {
    pub identity: Arc<OAuthIdentity>,
    pub api: CareerLogApi,
}

impl Services {
    pub fn from_config(
        config: &CareerLogConfig,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, api::AuthError> {
        let identity = Arc::new(OAuthIdentity::new(
            OAuthConfig::from_config(config)?,
            session,
        ));
        let client = ApiClient::from_config(config, identity.clone());
        Ok(Self {
            identity,
            api: CareerLogApi::new(client),
        })
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.identity, &other.identity)
    }
}

fn browser_session() -> Arc<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(api::auth::BrowserSession::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(api::auth::MemorySession::new())
    }
}

/// Navigate the whole page to `url`, leaving the app.
pub fn navigate_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("Continue at {}", url);
    }
}

/// Start the interactive sign-in redirect.
pub fn start_login(identity: &OAuthIdentity) {
    navigate_external(&identity.begin_login());
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

/// The domain API clients.
pub fn use_api() -> CareerLogApi {
    use_services().api
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: CareerLogConfig, children: Element) -> Element {
    let services = use_hook(|| Services::from_config(&config, browser_session()));

    let services = match services {
        Ok(services) => services,
        Err(e) => {
            tracing::error!("Invalid sign-in configuration: {}", e);
            return rsx! {
                div {
                    class: "config-error",
                    h1 { "CareerLog cannot start" }
                    p { "{e}" }
                }
            };
        }
    };

    rsx! {
        AuthScope { services: services, {children} }
    }
}

#[component]
fn AuthScope(services: Services, children: Element) -> Element {
    let identity = services.identity.clone();
    let auth_state = use_context_provider(|| {
        Signal::new(AuthState {
            account: identity.active_account(),
            session_expired: false,
        })
    });
    use_context_provider(|| services.clone());

    use_effect(move || {
        if auth_state().session_expired {
            tracing::warn!("Session expired, starting interactive sign-in");
            start_login(&identity);
        }
    });

    rsx! {
        {children}
    }
}

/// Surfaces API failures as toasts and hands expired sessions to the provider.
#[derive(Clone, Copy)]
pub struct ErrorReporter {
    toaster: Toaster,
    auth: Signal<AuthState>,
}

impl ErrorReporter {
    /// Report a failed `action`, e.g. "Failed to delete application".
    pub fn report(self, action: &str, error: &ApiError) {
        if error.is_auth_expired() {
            self.toaster.warning(error.to_string());
            let mut auth = self.auth;
            auth.write().session_expired = true;
            return;
        }
        tracing::error!("{}: {}", action, error);
        self.toaster.error(format!("{action}: {error}"));
    }

    pub fn success(self, message: impl Into<String>) {
        self.toaster.success(message);
    }
}

pub fn use_error_reporter() -> ErrorReporter {
    ErrorReporter {
        toaster: use_toast(),
        auth: use_auth(),
    }
}

/// Button that starts the interactive sign-in.
#[component]
pub fn LoginButton(
    #[props(default = "Sign in with Microsoft".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let services = use_services();
    let mut loading = use_signal(|| false);

    let onclick = move |_| {
        loading.set(true);
        start_login(&services.identity);
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading(),
            onclick: onclick,
            if loading() {
                "Redirecting..."
            } else {
                "{label}"
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let services = use_services();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        let url = services.identity.logout();
        auth_state.set(AuthState::default());
        navigate_external(&url);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
