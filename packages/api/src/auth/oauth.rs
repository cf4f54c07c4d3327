//! # OAuth 2.0 identity provider for the browser
//!
//! Implements the Authorization Code flow with PKCE as a public client (no
//! secret), against the tenant's v2.0 endpoints described by
//! [`OAuthConfig`].
//!
//! ## Flow
//!
//! 1. **[`begin_login`](OAuthIdentity::begin_login)** builds the authorization
//!    URL for the login scopes and stores the CSRF state and PKCE verifier in
//!    the session under [`SESSION_PENDING_LOGIN_KEY`] with a 10-minute expiry.
//!    The caller navigates the page to the returned URL.
//!
//! 2. **[`complete_login`](OAuthIdentity::complete_login)** runs on the
//!    redirect route. It consumes the pending login (a state can be redeemed
//!    once), exchanges the code plus verifier for tokens, reads the account
//!    from the `id_token` and caches account and token set in the session.
//!
//! 3. **[`acquire_token_silent`](IdentityProvider::acquire_token_silent)**
//!    hands out the cached access token while it is valid for more than
//!    five minutes and covers the requested scopes. Otherwise it redeems the
//!    refresh token. Without one, interaction is required.
//!
//! 4. **[`logout`](OAuthIdentity::logout)** clears the session and returns
//!    the provider's end-session URL.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use oauth2::basic::BasicTokenType;
use oauth2::{
    AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, ExtraTokenFields,
    PkceCodeChallenge, PkceCodeVerifier, RefreshToken, Scope, StandardTokenResponse,
    TokenResponse,
};
use serde::{Deserialize, Serialize};

use super::claims::account_from_id_token;
use super::config::OAuthConfig;
use super::provider::{AccessToken, Account, IdentityProvider};
use super::session::{
    self, SessionStore, SESSION_ACCOUNT_KEY, SESSION_PENDING_LOGIN_KEY, SESSION_TOKEN_KEY,
};
use crate::error::AuthError;

/// Tokens closer than this to expiry are refreshed.
const EXPIRY_SKEW_MINUTES: i64 = 5;
const PENDING_LOGIN_TTL_MINUTES: i64 = 10;
/// Assumed lifetime when the token response has no `expires_in`.
const DEFAULT_TOKEN_LIFETIME_MINUTES: i64 = 60;

/// The `id_token` returned next to the access token.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IdTokenFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

impl ExtraTokenFields for IdTokenFields {}

type OidcTokenResponse = StandardTokenResponse<IdTokenFields, BasicTokenType>;

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    OidcTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// State and verifier of a login between redirect and callback.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PendingLogin {
    state: String,
    verifier: String,
    expires_at: DateTime<Utc>,
}

/// The token set kept in the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct CachedToken {
    pub account_id: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub scopes: Vec<String>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - Duration::minutes(EXPIRY_SKEW_MINUTES) > now
    }

    fn covers(&self, scopes: &[String]) -> bool {
        scopes
            .iter()
            .all(|wanted| self.scopes.iter().any(|s| s.eq_ignore_ascii_case(wanted)))
    }

    fn to_access_token(&self) -> AccessToken {
        AccessToken {
            secret: self.access_token.clone(),
            expires_at: self.expires_at,
        }
    }
}

/// Identity provider backed by an OAuth 2.0 / OpenID Connect tenant.
#[derive(Clone)]
pub struct OAuthIdentity {
    config: OAuthConfig,
    session: Arc<dyn SessionStore>,
    http: reqwest::Client,
}

impl OAuthIdentity {
    pub fn new(config: OAuthConfig, session: Arc<dyn SessionStore>) -> Self {
        Self {
            config,
            session,
            http: token_http_client(),
        }
    }

    fn create_client(&self) -> ConfiguredClient {
        oauth2::Client::new(self.config.client_id.clone())
            .set_auth_uri(self.config.auth_url.clone())
            .set_token_uri(self.config.token_url.clone())
            .set_redirect_uri(self.config.redirect_url.clone())
    }

    /// Generate the authorization URL and remember its state and verifier.
    pub fn begin_login(&self) -> String {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (auth_url, csrf_state) = self
            .create_client()
            .authorize_url(CsrfToken::new_random)
            .add_scopes(self.config.login_scopes.iter().cloned().map(Scope::new))
            .set_pkce_challenge(pkce_challenge)
            .url();

        let pending = PendingLogin {
            state: csrf_state.secret().clone(),
            verifier: pkce_verifier.secret().clone(),
            expires_at: Utc::now() + Duration::minutes(PENDING_LOGIN_TTL_MINUTES),
        };
        session::save(&*self.session, SESSION_PENDING_LOGIN_KEY, &pending);

        tracing::info!("Starting interactive sign-in");
        auth_url.to_string()
    }

    /// Redeem the authorization code from the redirect.
    pub async fn complete_login(&self, code: &str, state: &str) -> Result<Account, AuthError> {
        let pending: PendingLogin = session::load(&*self.session, SESSION_PENDING_LOGIN_KEY)
            .ok_or(AuthError::StateMismatch)?;
        self.session.remove(SESSION_PENDING_LOGIN_KEY);

        if pending.state != state || pending.expires_at <= Utc::now() {
            tracing::warn!("Rejected sign-in callback with unknown or expired state");
            return Err(AuthError::StateMismatch);
        }

        let token = self
            .create_client()
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pending.verifier))
            .request_async(&self.http)
            .await
            .map_err(|e| AuthError::TokenRequest(format!("Token exchange failed: {}", e)))?;

        let id_token = token
            .extra_fields()
            .id_token
            .as_deref()
            .ok_or_else(|| AuthError::InvalidIdToken("missing from token response".to_string()))?;
        let account = account_from_id_token(id_token)?;

        session::save(&*self.session, SESSION_ACCOUNT_KEY, &account);
        self.cache_token(&token, &self.config.login_scopes, &account.id, None);

        tracing::info!("Signed in as {}", account.username);
        Ok(account)
    }

    /// Forget the session and return the end-session URL to navigate to.
    pub fn logout(&self) -> String {
        for key in [
            SESSION_ACCOUNT_KEY,
            SESSION_TOKEN_KEY,
            SESSION_PENDING_LOGIN_KEY,
        ] {
            self.session.remove(key);
        }
        tracing::info!("Signed out");
        self.config.end_session_url()
    }

    fn cache_token(
        &self,
        token: &OidcTokenResponse,
        requested: &[String],
        account_id: &str,
        previous_refresh: Option<String>,
    ) -> CachedToken {
        let lifetime = token
            .expires_in()
            .and_then(|d| Duration::from_std(d).ok())
            .unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_LIFETIME_MINUTES));
        let scopes = match token.scopes() {
            Some(granted) => granted.iter().map(|s| s.to_string()).collect(),
            None => requested.to_vec(),
        };

        let cached = CachedToken {
            account_id: account_id.to_string(),
            access_token: token.access_token().secret().clone(),
            refresh_token: token
                .refresh_token()
                .map(|t| t.secret().clone())
                .or(previous_refresh),
            expires_at: Utc::now() + lifetime,
            scopes,
        };
        session::save(&*self.session, SESSION_TOKEN_KEY, &cached);
        cached
    }
}

#[async_trait(?Send)]
impl IdentityProvider for OAuthIdentity {
    fn active_account(&self) -> Option<Account> {
        session::load(&*self.session, SESSION_ACCOUNT_KEY)
    }

    async fn acquire_token_silent(
        &self,
        scopes: &[String],
        account: &Account,
    ) -> Result<AccessToken, AuthError> {
        let cached: CachedToken = session::load(&*self.session, SESSION_TOKEN_KEY)
            .ok_or_else(|| AuthError::InteractionRequired("no cached session".to_string()))?;

        if cached.account_id != account.id {
            return Err(AuthError::InteractionRequired(
                "cached session belongs to another account".to_string(),
            ));
        }
        if cached.is_fresh(Utc::now()) && cached.covers(scopes) {
            return Ok(cached.to_access_token());
        }

        let refresh = cached
            .refresh_token
            .clone()
            .ok_or_else(|| AuthError::InteractionRequired("session expired".to_string()))?;

        tracing::debug!("Refreshing access token for {}", account.username);
        let token = self
            .create_client()
            .exchange_refresh_token(&RefreshToken::new(refresh.clone()))
            .add_scopes(scopes.iter().cloned().map(Scope::new))
            .request_async(&self.http)
            .await
            .map_err(|e| AuthError::TokenRequest(format!("Token refresh failed: {}", e)))?;

        Ok(self
            .cache_token(&token, scopes, &account.id, Some(refresh))
            .to_access_token())
    }
}

/// HTTP client for the token endpoint. Redirects are not followed natively;
/// the browser's fetch decides for itself on wasm32.
fn token_http_client() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_default()
    }
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::MemorySession;
    use model::CareerLogConfig;

    fn identity() -> (OAuthIdentity, MemorySession) {
        let mut config = CareerLogConfig::default();
        config.auth.client_id = "spa-client".to_string();
        config.auth.authority = "https://login.example.com/tenant".to_string();
        config.auth.post_logout_redirect_uri = "http://localhost:8080/".to_string();
        let session = MemorySession::new();
        let oauth = OAuthConfig::from_config(&config).unwrap();
        (OAuthIdentity::new(oauth, Arc::new(session.clone())), session)
    }

    fn account() -> Account {
        Account {
            id: "oid-1".to_string(),
            username: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            tenant_id: None,
        }
    }

    fn seed_token(session: &MemorySession, token: CachedToken) {
        session::save(session, SESSION_TOKEN_KEY, &token);
    }

    fn cached(expires_in: Duration, refresh: Option<&str>) -> CachedToken {
        CachedToken {
            account_id: "oid-1".to_string(),
            access_token: "at-1".to_string(),
            refresh_token: refresh.map(str::to_string),
            expires_at: Utc::now() + expires_in,
            scopes: vec!["api://careerlog/access_as_user".to_string()],
        }
    }

    fn api_scopes() -> Vec<String> {
        vec!["api://careerlog/access_as_user".to_string()]
    }

    #[test]
    fn test_begin_login_uses_pkce_and_stores_state() {
        let (identity, session) = identity();
        let url = identity.begin_login();

        assert!(url.starts_with("https://login.example.com/tenant/oauth2/v2.0/authorize?"));
        assert!(url.contains("client_id=spa-client"));
        assert!(url.contains("code_challenge_method=S256"));
        assert!(url.contains("offline_access"));

        let pending: PendingLogin = session::load(&session, SESSION_PENDING_LOGIN_KEY).unwrap();
        assert!(url.contains(&format!("state={}", pending.state)));
    }

    #[tokio::test]
    async fn test_complete_login_rejects_wrong_state_and_consumes_it() {
        let (identity, session) = identity();
        identity.begin_login();

        let result = identity.complete_login("code", "forged").await;
        assert_eq!(result, Err(AuthError::StateMismatch));
        assert!(session.get(SESSION_PENDING_LOGIN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_complete_login_without_pending_state() {
        let (identity, _) = identity();
        let result = identity.complete_login("code", "anything").await;
        assert_eq!(result, Err(AuthError::StateMismatch));
    }

    #[tokio::test]
    async fn test_silent_returns_fresh_cached_token() {
        let (identity, session) = identity();
        seed_token(&session, cached(Duration::minutes(30), None));

        let token = identity
            .acquire_token_silent(&api_scopes(), &account())
            .await
            .unwrap();
        assert_eq!(token.secret, "at-1");
    }

    #[tokio::test]
    async fn test_silent_requires_interaction_without_refresh_token() {
        let (identity, session) = identity();
        seed_token(&session, cached(Duration::minutes(2), None));

        let result = identity.acquire_token_silent(&api_scopes(), &account()).await;
        assert!(matches!(result, Err(AuthError::InteractionRequired(_))));
    }

    #[tokio::test]
    async fn test_silent_rejects_other_accounts_session() {
        let (identity, session) = identity();
        seed_token(&session, cached(Duration::minutes(30), Some("rt")));

        let mut other = account();
        other.id = "oid-2".to_string();
        let result = identity.acquire_token_silent(&api_scopes(), &other).await;
        assert!(matches!(result, Err(AuthError::InteractionRequired(_))));
    }

    #[tokio::test]
    async fn test_silent_without_session() {
        let (identity, _) = identity();
        let result = identity.acquire_token_silent(&api_scopes(), &account()).await;
        assert!(matches!(result, Err(AuthError::InteractionRequired(_))));
    }

    #[test]
    fn test_cached_token_scope_and_expiry_checks() {
        let token = cached(Duration::minutes(6), None);
        assert!(token.is_fresh(Utc::now()));
        assert!(token.covers(&["API://careerlog/access_as_user".to_string()]));
        assert!(!token.covers(&["User.Read".to_string()]));
        assert!(!cached(Duration::minutes(4), None).is_fresh(Utc::now()));
    }

    #[test]
    fn test_logout_clears_session() {
        let (identity, session) = identity();
        session::save(&session, SESSION_ACCOUNT_KEY, &account());
        seed_token(&session, cached(Duration::minutes(30), Some("rt")));

        let url = identity.logout();
        assert!(url.contains("/oauth2/v2.0/logout?post_logout_redirect_uri="));
        assert!(identity.active_account().is_none());
        assert!(session.get(SESSION_TOKEN_KEY).is_none());
    }

    #[test]
    fn test_active_account_reads_session() {
        let (identity, session) = identity();
        assert!(identity.active_account().is_none());
        session::save(&session, SESSION_ACCOUNT_KEY, &account());
        assert_eq!(identity.active_account(), Some(account()));
    }
}
