//! `gloo-net` implementation of [`api::Transport`].
//!
//! Client-side (csr): real `fetch` calls.
//! Native builds: every call fails with [`ApiError::Unavailable`] so pages
//! compile and degrade the same way they do on a network error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use api::{ApiConfig, ApiError, ApiRequest, ApiResponse, Transport};

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, config: &ApiConfig, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use api::Method;
            use gloo_net::http::Request;

            let url = request.url(config);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            for (name, value) in request.headers(config) {
                builder = builder.header(name, &value);
            }
            let sent = match &request.body {
                Some(body) => builder
                    .body(body.to_string())
                    .map_err(|e| ApiError::Transport(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let response = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(ApiResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (config, request);
            Err(ApiError::Unavailable)
        }
    }
}
