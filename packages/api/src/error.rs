//! Error types for the identity layer and the API client.

use thiserror::Error;

/// Failures while signing in or acquiring a token.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("No signed-in account")]
    NoAccount,

    /// The cached session cannot produce a token without user interaction.
    #[error("Interaction required: {0}")]
    InteractionRequired(String),

    #[error("Invalid or expired login state")]
    StateMismatch,

    #[error("Invalid identity token: {0}")]
    InvalidIdToken(String),

    #[error("Invalid identity provider configuration: {0}")]
    Config(String),

    #[error("Token request failed: {0}")]
    TokenRequest(String),
}

/// Outcome of a failed backend call.
///
/// `AuthExpired` means the session could not be recovered silently and the
/// caller should start an interactive sign-in. Every other variant is shown
/// to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Your session has expired, please sign in again")]
    AuthExpired,

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }

    /// HTTP status for backend rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
