//! # Wire-level request/response types and the transport seam
//!
//! [`ApiRequest`] describes a call relative to the API base URL; the
//! authenticated client fills in the bearer token before handing it to a
//! [`Transport`]. [`ReqwestTransport`] is the production transport and works
//! both natively and in the browser (reqwest uses `fetch` on wasm32).

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// A backend call, relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, e.g. `/applications/3`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Bearer token, set by the authenticated client.
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Status and raw body of a backend response.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the JSON body. An empty body decodes as JSON `null`, so
    /// `()` and `Option<T>` accept `204 No Content`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let body = self.body.trim();
        let body = if body.is_empty() { "null" } else { body };
        Ok(serde_json::from_str(body)?)
    }

    /// Message to show for a failed response: the backend's `message` or
    /// `error` field, else the raw body, else the status reason.
    pub fn error_message(&self) -> String {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&self.body) {
            for field in ["message", "error"] {
                if let Some(message) = value.get(field).and_then(|v| v.as_str()) {
                    if !message.trim().is_empty() {
                        return message.to_string();
                    }
                }
            }
        }
        let body = self.body.trim();
        if !body.is_empty() {
            return body.to_string();
        }
        reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map(|reason| format!("Request failed: {} {}", self.status, reason))
            .unwrap_or_else(|| format!("Request failed with status {}", self.status))
    }
}

/// Sends requests to the backend.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// [`Transport`] over a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = self
            .http
            .request(request.method.to_reqwest(), self.url(&request.path))
            .header(reqwest::header::ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let transport = ReqwestTransport::new("http://localhost:8080/api/");
        assert_eq!(
            transport.url("/applications/3"),
            "http://localhost:8080/api/applications/3"
        );
        assert_eq!(transport.url("dashboard/overview"), "http://localhost:8080/api/dashboard/overview");
    }

    #[test]
    fn test_empty_body_decodes_as_unit() {
        let response = ApiResponse::new(204, "");
        assert!(response.is_success());
        response.decode::<()>().unwrap();
        assert!(ApiResponse::new(200, "  ").decode::<Option<u32>>().unwrap().is_none());
    }

    #[test]
    fn test_error_message_sources() {
        let json = ApiResponse::new(400, r#"{"message":"Company name is required","status":400}"#);
        assert_eq!(json.error_message(), "Company name is required");

        let spring = ApiResponse::new(500, r#"{"error":"Internal Server Error"}"#);
        assert_eq!(spring.error_message(), "Internal Server Error");

        let text = ApiResponse::new(502, "upstream down");
        assert_eq!(text.error_message(), "upstream down");

        let empty = ApiResponse::new(404, "");
        assert_eq!(empty.error_message(), "Request failed: 404 Not Found");
    }

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::get("/activities/user").query("limit", 20);
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.query, vec![("limit".to_string(), "20".to_string())]);
        assert!(request.bearer.is_none());

        let request = ApiRequest::post("/applications")
            .json(&serde_json::json!({"companyName": "Acme"}))
            .unwrap();
        assert_eq!(request.body.unwrap()["companyName"], "Acme");
    }
}
