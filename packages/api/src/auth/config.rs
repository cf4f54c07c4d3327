//! OAuth endpoints and client settings derived from [`CareerLogConfig`].

use model::CareerLogConfig;
use oauth2::url::Url;
use oauth2::{AuthUrl, ClientId, RedirectUrl, TokenUrl};

use crate::error::AuthError;

/// OAuth provider configuration for a public (SPA) client.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
    pub logout_url: Url,
    pub post_logout_redirect_uri: String,
    pub login_scopes: Vec<String>,
}

impl OAuthConfig {
    /// Build the v2.0 endpoints below the configured authority.
    pub fn from_config(config: &CareerLogConfig) -> Result<Self, AuthError> {
        let authority = config.authority();
        let endpoint = |name: &str| format!("{authority}/oauth2/v2.0/{name}");

        Ok(Self {
            client_id: ClientId::new(config.auth.client_id.clone()),
            auth_url: AuthUrl::new(endpoint("authorize"))
                .map_err(|e| AuthError::Config(e.to_string()))?,
            token_url: TokenUrl::new(endpoint("token"))
                .map_err(|e| AuthError::Config(e.to_string()))?,
            redirect_url: RedirectUrl::new(config.auth.redirect_uri.clone())
                .map_err(|e| AuthError::Config(e.to_string()))?,
            logout_url: Url::parse(&endpoint("logout"))
                .map_err(|e| AuthError::Config(e.to_string()))?,
            post_logout_redirect_uri: config.auth.post_logout_redirect_uri.clone(),
            login_scopes: config.login_scopes(),
        })
    }

    /// End-session URL that returns to the post-logout redirect URI.
    pub fn end_session_url(&self) -> String {
        let mut url = self.logout_url.clone();
        url.query_pairs_mut()
            .append_pair("post_logout_redirect_uri", &self.post_logout_redirect_uri);
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_follow_authority() {
        let mut config = CareerLogConfig::default();
        config.auth.authority = "https://login.microsoftonline.com/contoso/".to_string();
        config.auth.post_logout_redirect_uri = "http://localhost:8080/".to_string();

        let oauth = OAuthConfig::from_config(&config).unwrap();
        assert_eq!(
            oauth.auth_url.as_str(),
            "https://login.microsoftonline.com/contoso/oauth2/v2.0/authorize"
        );
        assert_eq!(
            oauth.token_url.as_str(),
            "https://login.microsoftonline.com/contoso/oauth2/v2.0/token"
        );
        assert_eq!(
            oauth.end_session_url(),
            "https://login.microsoftonline.com/contoso/oauth2/v2.0/logout?post_logout_redirect_uri=http%3A%2F%2Flocalhost%3A8080%2F"
        );
    }

    #[test]
    fn test_invalid_redirect_is_a_config_error() {
        let mut config = CareerLogConfig::default();
        config.auth.redirect_uri = "not a url".to_string();
        assert!(matches!(
            OAuthConfig::from_config(&config),
            Err(AuthError::Config(_))
        ));
    }
}
