//! # Client configuration in `careerlog.toml`
//!
//! Describes where the front-end signs in and which backend it talks to.
//! The file is optional: every key has a default, so a missing or empty file
//! is equivalent to [`CareerLogConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [auth]
//! client_id = "your-client-id"
//! authority = "https://login.microsoftonline.com/common"
//! redirect_uri = "http://localhost:8080/auth/callback"
//! post_logout_redirect_uri = "/"
//! api_scope = "api://your-api-client-id/access_as_user"
//!
//! [api]
//! base_url = "http://localhost:8080/api"
//! ```
//!
//! ## Environment overrides
//!
//! [`CareerLogConfig::with_overrides`] layers `CAREERLOG_*` variables on top
//! of a config. The lookup is a closure so native builds can pass
//! `std::env::var` while the wasm build passes values baked in at compile
//! time. Blank values are ignored.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `careerlog.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerLogConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Identity provider settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_client_id")]
    pub client_id: String,
    /// Base URL of the tenant, e.g. `https://login.microsoftonline.com/<tenant>`.
    #[serde(default = "default_authority")]
    pub authority: String,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    #[serde(default = "default_post_logout_redirect_uri")]
    pub post_logout_redirect_uri: String,
    /// Scope that grants access to the CareerLog API.
    #[serde(default = "default_api_scope")]
    pub api_scope: String,
}

/// Backend settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_client_id() -> String {
    "your-client-id".to_string()
}

fn default_authority() -> String {
    "https://login.microsoftonline.com/common".to_string()
}

fn default_redirect_uri() -> String {
    "http://localhost:8080/auth/callback".to_string()
}

fn default_post_logout_redirect_uri() -> String {
    "/".to_string()
}

fn default_api_scope() -> String {
    "api://your-api-client-id/access_as_user".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            client_id: default_client_id(),
            authority: default_authority(),
            redirect_uri: default_redirect_uri(),
            post_logout_redirect_uri: default_post_logout_redirect_uri(),
            api_scope: default_api_scope(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Environment variable names, paired with the field each one overrides.
pub const ENV_CLIENT_ID: &str = "CAREERLOG_CLIENT_ID";
pub const ENV_AUTHORITY: &str = "CAREERLOG_AUTHORITY";
pub const ENV_REDIRECT_URI: &str = "CAREERLOG_REDIRECT_URI";
pub const ENV_POST_LOGOUT_REDIRECT_URI: &str = "CAREERLOG_POST_LOGOUT_REDIRECT_URI";
pub const ENV_API_SCOPE: &str = "CAREERLOG_API_SCOPE";
pub const ENV_API_BASE_URL: &str = "CAREERLOG_API_BASE_URL";

impl CareerLogConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "careerlog.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply `CAREERLOG_*` overrides resolved through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_CLIENT_ID) {
            self.auth.client_id = v;
        }
        if let Some(v) = get(ENV_AUTHORITY) {
            self.auth.authority = v;
        }
        if let Some(v) = get(ENV_REDIRECT_URI) {
            self.auth.redirect_uri = v;
        }
        if let Some(v) = get(ENV_POST_LOGOUT_REDIRECT_URI) {
            self.auth.post_logout_redirect_uri = v;
        }
        if let Some(v) = get(ENV_API_SCOPE) {
            self.auth.api_scope = v;
        }
        if let Some(v) = get(ENV_API_BASE_URL) {
            self.api.base_url = v;
        }
        self
    }

    /// Scopes requested at interactive sign-in.
    pub fn login_scopes(&self) -> Vec<String> {
        vec![
            self.auth.api_scope.clone(),
            "User.Read".to_string(),
            "openid".to_string(),
            "profile".to_string(),
            "offline_access".to_string(),
        ]
    }

    /// Scopes attached to every API call.
    pub fn api_scopes(&self) -> Vec<String> {
        vec![self.auth.api_scope.clone()]
    }

    /// Authority without a trailing slash.
    pub fn authority(&self) -> &str {
        self.auth.authority.trim_end_matches('/')
    }
}
