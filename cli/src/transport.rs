//! `reqwest` implementation of [`api::Transport`].

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use api::{ApiConfig, ApiError, ApiRequest, ApiResponse, Method, Transport};

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

pub(crate) fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, config: &ApiConfig, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = self.client.request(to_reqwest_method(request.method), request.url(config));
        for (name, value) in request.headers(config) {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }
        let response = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        tracing::debug!(status, bytes = body.len(), "response");
        Ok(ApiResponse::new(status, body))
    }
}
