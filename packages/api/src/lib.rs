//! # Authenticated access to the CareerLog backend
//!
//! Everything the front-end needs to talk to the REST backend: signing in,
//! attaching tokens, and one typed client per backend resource.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`IdentityProvider`] seam, OAuth 2.0 + PKCE sign-in ([`OAuthIdentity`]), session storage |
//! | [`http`] | Request/response types, the [`Transport`] seam and its `reqwest` implementation |
//! | [`client`] | [`ApiClient`]: bearer attachment and 401 recovery |
//! | [`applications`] | `/applications` CRUD, paging and search, filter by status |
//! | [`activities`] | `/activities` for the current user or one application |
//! | [`dashboard`] | `/dashboard` overview, weekly counts, recent feed, analytics |
//! | [`attachments`] | `/attachments` metadata, per-type listing and counts |
//!
//! ## Wiring
//!
//! There is no global client. Build one [`ApiClient`] from an identity
//! provider and a transport, then hand it to [`CareerLogApi::new`]:
//!
//! ```ignore
//! let config = CareerLogConfig::default();
//! let identity = Arc::new(OAuthIdentity::new(
//!     OAuthConfig::from_config(&config)?,
//!     Arc::new(MemorySession::new()),
//! ));
//! let api = CareerLogApi::new(ApiClient::from_config(&config, identity));
//! let page = api.applications.list(&PageRequest::default()).await?;
//! ```
//!
//! Every call returns `Result<_, ApiError>`. [`ApiError::AuthExpired`] asks
//! the caller to start an interactive sign-in.

pub mod activities;
pub mod applications;
pub mod attachments;
pub mod auth;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod http;

#[cfg(test)]
mod fakes;

pub use activities::ActivitiesApi;
pub use applications::ApplicationsApi;
pub use attachments::AttachmentsApi;
pub use auth::{AccessToken, Account, IdentityProvider, OAuthConfig, OAuthIdentity};
pub use client::ApiClient;
pub use dashboard::DashboardApi;
pub use error::{ApiError, AuthError};
pub use http::{ApiRequest, ApiResponse, ReqwestTransport, Transport};

/// The domain clients over one shared [`ApiClient`].
#[derive(Clone)]
pub struct CareerLogApi {
    pub applications: ApplicationsApi,
    pub activities: ActivitiesApi,
    pub dashboard: DashboardApi,
    pub attachments: AttachmentsApi,
}

impl CareerLogApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            applications: ApplicationsApi::new(client.clone()),
            activities: ActivitiesApi::new(client.clone()),
            dashboard: DashboardApi::new(client.clone()),
            attachments: AttachmentsApi::new(client),
        }
    }
}
