//! Transport-neutral request description.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`HolidazeApi`](crate::HolidazeApi) builds [`ApiRequest`] values; a
//! [`Transport`] turns them into real HTTP. Header policy lives here so every
//! front end sends the same authorization contract: the API key on every call
//! when one is configured, plus the bearer token on authenticated calls.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://v2.api.noroff.dev";

/// Header carrying the application API key.
pub const API_KEY_HEADER: &str = "X-Noroff-API-Key";

/// Where to send requests and which API key to attach.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), api_key: None }
    }
}

impl ApiConfig {
    /// Build a config, ignoring blank API keys.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        Self { base_url, api_key }
    }
}

/// HTTP verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Credentials attached to a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Auth {
    /// Anonymous call; only the API key (if any) is sent.
    Public,
    /// Call on behalf of a signed-in user.
    Bearer(String),
}

/// One HTTP call against the API, independent of the HTTP client in use.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub auth: Auth,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), auth: Auth::Public, body: None }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    #[must_use]
    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(Method::Put, path).with_body(body)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_owned(), value.into()));
        self
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.auth = Auth::Bearer(token.to_owned());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Absolute URL including the percent-encoded query string.
    #[must_use]
    pub fn url(&self, config: &ApiConfig) -> String {
        let mut url = format!("{}{}", config.base_url, self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Headers to send, in a stable order.
    #[must_use]
    pub fn headers(&self, config: &ApiConfig) -> Vec<(&'static str, String)> {
        let mut headers = Vec::with_capacity(3);
        if self.body.is_some() {
            headers.push(("Content-Type", "application/json".to_owned()));
        }
        if let Auth::Bearer(token) = &self.auth {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        if let Some(key) = &config.api_key {
            headers.push((API_KEY_HEADER, key.clone()));
        }
        headers
    }
}

/// Raw HTTP answer handed back by a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the `data` member of a success envelope, or turn a failure
    /// status into [`ApiError::Status`].
    pub(crate) fn into_data<T: DeserializeOwned>(self, fallback: &str) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::from_response(&self, fallback));
        }
        #[derive(serde::Deserialize)]
        struct Envelope<T> {
            data: T,
        }
        let envelope: Envelope<T> = serde_json::from_str(&self.body)?;
        Ok(envelope.data)
    }

    /// Check the status only; used for endpoints answering `204 No Content`.
    pub(crate) fn into_unit(self, fallback: &str) -> Result<(), ApiError> {
        if self.is_success() { Ok(()) } else { Err(ApiError::from_response(&self, fallback)) }
    }
}

/// Sends one [`ApiRequest`] and returns the raw response.
///
/// Implementations only report transport-level failures as errors; non-2xx
/// statuses are returned as responses and decoded by the caller. Futures are
/// not required to be `Send`, matching the single-threaded browser runtime.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, config: &ApiConfig, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}
