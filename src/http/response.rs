//! Response construction helpers.
//!
//! # Responsibilities
//! - Build JSON responses with an explicit status code
//! - Build the uniform `{"error": ...}` body for client-visible failures
//!
//! # Design Decisions
//! - Handlers return complete responses; nothing downstream rewrites them
//! - Error bodies carry a message only, never internal detail

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Serialize `data` as the JSON body of a response with the given status.
pub fn json_response<T: Serialize>(data: T, status: StatusCode) -> Response {
    (status, Json(data)).into_response()
}

/// A JSON error body of the shape `{"error": message}`.
pub fn error_response(message: &str, status: StatusCode) -> Response {
    json_response(serde_json::json!({ "error": message }), status)
}

/// A bodyless response, e.g. 204 after a delete.
pub fn empty_response(status: StatusCode) -> Response {
    status.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn json_response_sets_content_type() {
        let response = json_response(serde_json::json!({"ok": true}), StatusCode::OK);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn error_response_wraps_message() {
        let response = error_response("nope", StatusCode::BAD_REQUEST);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_response_has_status_only() {
        let response = empty_response(StatusCode::NO_CONTENT);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
