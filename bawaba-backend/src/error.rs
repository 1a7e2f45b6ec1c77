use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use crate::handlers::utils::json_reply;

type StoreError = bawaba_db::StoreError;

/// Top-level API error shared by all route handlers.
///
/// Authentication rejections are not errors; they are ordinary responses
/// built by the login handler. Only infrastructure failures land here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("user store error: {0}")]
    Store(#[from] StoreError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error = %self, "request failed");
        json_reply(status, json!({ "error": self.to_string() }))
    }
}
