//! # Authenticated HTTP client
//!
//! [`ApiClient`] is the one place where requests get authorized. It is built
//! from an [`IdentityProvider`] and a [`Transport`], is cheap to clone and is
//! handed to each domain client through its constructor.
//!
//! Per request:
//!
//! - With a signed-in account, a token for the API scopes is acquired
//!   silently and sent as `Authorization: Bearer`. If that fails the request
//!   goes out without one. With no account the header is omitted.
//! - A `401` for a signed-in account triggers exactly one more silent
//!   acquisition. If that fails too the call returns
//!   [`ApiError::AuthExpired`]; otherwise the 401 is returned as
//!   [`ApiError::Http`]. The request itself is never retried.
//! - Any other non-2xx status becomes [`ApiError::Http`].

use std::sync::Arc;

use model::CareerLogConfig;
use serde::de::DeserializeOwned;

use crate::auth::IdentityProvider;
use crate::error::ApiError;
use crate::http::{ApiRequest, ApiResponse, ReqwestTransport, Transport};

const UNAUTHORIZED: u16 = 401;

#[derive(Clone)]
pub struct ApiClient {
    identity: Arc<dyn IdentityProvider>,
    transport: Arc<dyn Transport>,
    scopes: Arc<[String]>,
}

impl ApiClient {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        transport: Arc<dyn Transport>,
        scopes: Vec<String>,
    ) -> Self {
        Self {
            identity,
            transport,
            scopes: scopes.into(),
        }
    }

    /// Client for the configured base URL and API scope.
    pub fn from_config(config: &CareerLogConfig, identity: Arc<dyn IdentityProvider>) -> Self {
        Self::new(
            identity,
            Arc::new(ReqwestTransport::new(config.api.base_url.clone())),
            config.api_scopes(),
        )
    }

    /// Send a request and decode a successful response body.
    pub async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        self.send(request).await?.decode()
    }

    /// Send a request, returning the raw response when it succeeded.
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let account = self.identity.active_account();

        if let Some(account) = &account {
            match self
                .identity
                .acquire_token_silent(&self.scopes, account)
                .await
            {
                Ok(token) => request.bearer = Some(token.secret),
                Err(e) => tracing::warn!(
                    "Silent token acquisition failed, sending {} {} without a token: {}",
                    request.method,
                    request.path,
                    e
                ),
            }
        }

        tracing::debug!(
            "{} {} (token attached: {})",
            request.method,
            request.path,
            request.bearer.is_some()
        );
        let response = self.transport.execute(&request).await?;

        if response.is_success() {
            return Ok(response);
        }

        if response.status == UNAUTHORIZED {
            if let Some(account) = &account {
                tracing::warn!("{} {} was rejected with 401", request.method, request.path);
                if let Err(e) = self
                    .identity
                    .acquire_token_silent(&self.scopes, account)
                    .await
                {
                    tracing::warn!("Session could not be renewed silently: {}", e);
                    return Err(ApiError::AuthExpired);
                }
            }
        }

        Err(ApiError::Http {
            status: response.status,
            message: response.error_message(),
        })
    }
}
