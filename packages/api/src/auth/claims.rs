//! Reads the account out of an OpenID Connect `id_token`.
//!
//! The token arrives directly from the token endpoint over TLS and is only
//! used to label the session; the backend validates the access token it is
//! sent. The signature is therefore not checked here.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use super::provider::Account;
use crate::error::AuthError;

#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    oid: Option<String>,
    sub: Option<String>,
    preferred_username: Option<String>,
    email: Option<String>,
    name: Option<String>,
    tid: Option<String>,
}

/// Decode the payload segment of `id_token` into an [`Account`].
pub fn account_from_id_token(id_token: &str) -> Result<Account, AuthError> {
    let payload = id_token
        .split('.')
        .nth(1)
        .ok_or_else(|| AuthError::InvalidIdToken("not a JWT".to_string()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AuthError::InvalidIdToken(e.to_string()))?;
    let claims: IdTokenClaims =
        serde_json::from_slice(&bytes).map_err(|e| AuthError::InvalidIdToken(e.to_string()))?;

    let id = claims
        .oid
        .or(claims.sub)
        .ok_or_else(|| AuthError::InvalidIdToken("missing subject".to_string()))?;

    Ok(Account {
        id,
        username: claims
            .preferred_username
            .or(claims.email)
            .unwrap_or_default(),
        name: claims.name,
        tenant_id: claims.tid,
    })
}

#[cfg(test)]
pub(crate) fn encode_test_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_prefers_oid_and_preferred_username() {
        let token = encode_test_token(&json!({
            "oid": "00000000-aaaa",
            "sub": "subject",
            "preferred_username": "ada@example.com",
            "email": "other@example.com",
            "name": "Ada Lovelace",
            "tid": "tenant-1"
        }));

        let account = account_from_id_token(&token).unwrap();
        assert_eq!(account.id, "00000000-aaaa");
        assert_eq!(account.username, "ada@example.com");
        assert_eq!(account.display_name(), "Ada Lovelace");
        assert_eq!(account.tenant_id.as_deref(), Some("tenant-1"));
    }

    #[test]
    fn test_account_falls_back_to_sub_and_email() {
        let token = encode_test_token(&json!({ "sub": "s-1", "email": "b@example.com" }));
        let account = account_from_id_token(&token).unwrap();
        assert_eq!(account.id, "s-1");
        assert_eq!(account.display_name(), "b@example.com");
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert!(matches!(
            account_from_id_token("opaque"),
            Err(AuthError::InvalidIdToken(_))
        ));
        assert!(matches!(
            account_from_id_token("a.!!!.c"),
            Err(AuthError::InvalidIdToken(_))
        ));
        let anonymous = encode_test_token(&json!({ "name": "Nobody" }));
        assert!(matches!(
            account_from_id_token(&anonymous),
            Err(AuthError::InvalidIdToken(_))
        ));
    }
}
