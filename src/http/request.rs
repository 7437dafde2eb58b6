//! Request inspection helpers.
//!
//! # Responsibilities
//! - Name the request-ID header used across the middleware stack
//! - Expose the request ID to handlers and dispatch logging
//! - Parse JSON request bodies for handlers that want them
//!
//! # Design Decisions
//! - The request ID is generated by middleware (UUID v4) before dispatch,
//!   so it is always present by the time a handler runs
//! - Body parsing signals "unparseable" with `None`; what that means is the
//!   handler's decision

use axum::body::Body;
use axum::http::{HeaderName, Request};
use serde_json::Value;

/// Header carrying the per-request correlation ID.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Upper bound on buffered request bodies.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Access to the request ID set by the middleware stack.
pub trait RequestIdExt {
    /// The value of the `x-request-id` header, if present and valid UTF-8.
    fn request_id(&self) -> Option<&str>;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> Option<&str> {
        self.headers()
            .get(&X_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
    }
}

/// Read and parse the request body as JSON.
///
/// Returns `None` when the body is absent, oversized, or not valid JSON.
pub async fn parse_json_body(request: Request<Body>) -> Option<Value> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}
