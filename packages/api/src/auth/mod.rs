//! Authentication: the identity provider seam and its OAuth implementation.

mod claims;
mod config;
mod oauth;
mod provider;
pub mod session;

pub use claims::account_from_id_token;
pub use config::OAuthConfig;
pub use oauth::{IdTokenFields, OAuthIdentity};
pub use provider::{AccessToken, Account, IdentityProvider};
#[cfg(target_arch = "wasm32")]
pub use session::BrowserSession;
pub use session::{MemorySession, SessionStore};

