use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::Value;

/// Content type advertised on every JSON response. The explicit charset is
/// part of the external contract.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Build a JSON response with the contract content type.
pub fn json_reply(status: StatusCode, body: Value) -> Response {
    let mut resp = (status, Json(body)).into_response();
    resp.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    resp
}
