use serde::Deserialize;

use crate::request::ApiResponse;

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The API answered with a non-success status.
    #[error("{message} ({status})")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// No transport is available in this build (e.g. native client tests).
    #[error("network access is not available here")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for a toast or inline error line.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Transport(_) | Self::Unavailable => "Something went wrong. Please try again.".to_owned(),
            Self::Decode(_) => "Received an unexpected response from the server.".to_owned(),
        }
    }

    /// `true` for 401/403 answers, which is how a stale token shows up.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }

    /// Build a status error from a failed response, preferring the first
    /// message in the body's `errors` array over `fallback`.
    pub(crate) fn from_response(response: &ApiResponse, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| fallback.to_owned());
        Self::Status { status: response.status, message }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorItem>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.errors
            .into_iter()
            .find_map(|item| item.message)
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
    }
}
