use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors returned by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unsupported language '{0}'")]
    UnknownLanguage(String),

    #[error("unknown message key '{0}'")]
    UnknownKey(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownLanguage(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownKey(_) | ApiError::UnknownCommand(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request rejected");
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
