//! In-memory identity provider and transport for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::auth::{AccessToken, Account, IdentityProvider};
use crate::error::{ApiError, AuthError};
use crate::http::{ApiRequest, ApiResponse, Transport};

/// Hands out queued token results; an empty queue means interaction required.
pub struct FakeIdentity {
    account: Option<Account>,
    results: Mutex<VecDeque<Result<AccessToken, AuthError>>>,
    scopes: Mutex<Vec<Vec<String>>>,
    calls: AtomicUsize,
}

impl FakeIdentity {
    pub fn signed_out() -> Self {
        Self {
            account: None,
            results: Mutex::new(VecDeque::new()),
            scopes: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn signed_in() -> Self {
        Self {
            account: Some(Account {
                id: "oid-1".to_string(),
                username: "ada@example.com".to_string(),
                name: Some("Ada".to_string()),
                tenant_id: None,
            }),
            ..Self::signed_out()
        }
    }

    pub fn grant(&self, secret: &str) {
        self.results.lock().unwrap().push_back(Ok(AccessToken {
            secret: secret.to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        }));
    }

    pub fn deny(&self) {
        self.results
            .lock()
            .unwrap()
            .push_back(Err(AuthError::InteractionRequired("denied".to_string())));
    }

    /// Number of silent acquisitions attempted.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_scopes(&self) -> Vec<Vec<String>> {
        self.scopes.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FakeIdentity {
    fn active_account(&self) -> Option<Account> {
        self.account.clone()
    }

    async fn acquire_token_silent(
        &self,
        scopes: &[String],
        _account: &Account,
    ) -> Result<AccessToken, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scopes.lock().unwrap().push(scopes.to_vec());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::InteractionRequired("empty".to_string())))
    }
}

/// Replays queued responses and records every request it was given.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn fail(&self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request sent so far.
    pub fn last(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no response queued".to_string())))
    }
}
