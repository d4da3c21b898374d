//! Error types for the video proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Proxy Error Enum ==
/// Unified error type for the video proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Required configuration is missing (e.g. the upstream API key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream answered with a non-success status
    #[error("Upstream error: status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Upstream body could not be decoded, or lacked items in strict mode
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Request never produced an upstream response (connect, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ProxyError {
    /// The request URL carries the API key, so it never reaches the message.
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Transport(err.without_url().to_string())
    }
}

impl ProxyError {
    /// HTTP status this error is surfaced with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Config(_)
            | ProxyError::Upstream { .. }
            | ProxyError::MalformedResponse(_)
            | ProxyError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the video proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
