//! This crate contains all shared UI for the workspace.
//!
//! Pages live in [`views`] and talk to the backend through the clients that
//! [`AuthProvider`] puts in the context. The plain modules ([`forms`],
//! [`pagination`], [`rows`], [`stats`], [`styling`]) hold the state and
//! derivations behind the pages and carry no Dioxus types.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");

mod auth;
pub use auth::{
    navigate_external, start_login, use_api, use_auth, use_error_reporter, use_services,
    AuthProvider, AuthState, ErrorReporter, LoginButton, LogoutButton, Services,
};

pub mod toast;
pub use toast::{use_toast, ToastLevel, ToastProvider, Toaster};

pub mod forms;
pub mod pagination;
pub mod rows;
pub mod stats;
pub mod styling;
