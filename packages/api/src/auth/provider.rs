//! The identity provider seam used by the authenticated client.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// A signed-in user as reported by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Stable object id (`oid`, falling back to `sub`).
    pub id: String,
    /// Sign-in name, usually an email address.
    pub username: String,
    pub name: Option<String>,
    pub tenant_id: Option<String>,
}

impl Account {
    /// Get display name, falling back to the username if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

/// A bearer credential for the API.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessToken {
    pub secret: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues bearer tokens for the signed-in account.
///
/// Interactive sign-in is not part of this trait: the client only ever asks
/// for tokens silently and reports [`crate::ApiError::AuthExpired`] when that
/// is no longer possible.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// The account requests are made for, if anyone is signed in.
    fn active_account(&self) -> Option<Account>;

    /// Get a token for `scopes` without user interaction, using the cached
    /// session or its refresh token.
    async fn acquire_token_silent(
        &self,
        scopes: &[String],
        account: &Account,
    ) -> Result<AccessToken, AuthError>;
}
