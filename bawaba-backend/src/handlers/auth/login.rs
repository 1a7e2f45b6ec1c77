use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::json;

use crate::error::ApiError;
use crate::handlers::utils::json_reply;
use crate::messages::LoginOutcome;
use crate::state::AppState;

use super::dto::LoginRequest;

/// POST /login
///
/// Validates the submitted username/password pair against the stored record
/// and answers with a localized outcome message. The handler is stateless;
/// repeating a request always yields the same outcome.
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let creds = LoginRequest::from_body(&body);

    if creds.username.is_empty() || creds.password.is_empty() {
        return Ok(json_reply(
            StatusCode::BAD_REQUEST,
            json!({ "message": state.messages.text(LoginOutcome::MissingCredentials) }),
        ));
    }

    // Store errors propagate as 500; they must never masquerade as a 401.
    let maybe = state.store().find_by_username(&creds.username).await?;

    let Some(user) = maybe else {
        tracing::debug!(username = %creds.username, "login rejected: unknown username");
        return Ok(json_reply(
            StatusCode::UNAUTHORIZED,
            json!({ "message": state.messages.text(LoginOutcome::UnknownUsername) }),
        ));
    };

    // Verbatim comparison against the stored value. The stored-data format
    // is plaintext and part of the deployed contract; switching to a hash
    // check requires a coordinated data migration first.
    if creds.password != user.password {
        tracing::debug!(username = %user.username, "login rejected: password mismatch");
        return Ok(json_reply(
            StatusCode::UNAUTHORIZED,
            json!({ "message": state.messages.text(LoginOutcome::WrongPassword) }),
        ));
    }

    tracing::info!(username = %user.username, "login succeeded");
    Ok(json_reply(
        StatusCode::OK,
        json!({
            "message": state.messages.text(LoginOutcome::Succeeded),
            "user": { "username": user.username },
        }),
    ))
}
