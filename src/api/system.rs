//! System and demo handlers: liveness, greetings.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};

use crate::http::request::parse_json_body;
use crate::http::response::json_response;
use crate::routing::{HandlerResult, PathParams};

/// GET /api
pub async fn index(_request: Request<Body>, _params: PathParams) -> HandlerResult {
    Ok(json_response(
        json!({ "message": "API is running!" }),
        StatusCode::OK,
    ))
}

/// GET /api/healthcheck
pub async fn healthcheck(_request: Request<Body>, _params: PathParams) -> HandlerResult {
    Ok(json_response(json!({ "status": "healthy" }), StatusCode::OK))
}

/// GET /api/hello
pub async fn hello(_request: Request<Body>, _params: PathParams) -> HandlerResult {
    Ok(json_response(
        json!({ "message": "Hello, world!" }),
        StatusCode::OK,
    ))
}

/// POST /api/hello — greets `body.name`, falling back when the body is
/// missing, unparseable, or has no string name.
pub async fn hello_post(request: Request<Body>, _params: PathParams) -> HandlerResult {
    let body = parse_json_body(request).await;
    let name = body
        .as_ref()
        .and_then(|value| value.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("anonymous");

    Ok(json_response(
        json!({
            "message": format!("Hello, {name}!"),
            "received": body,
        }),
        StatusCode::OK,
    ))
}

/// GET /api/hello/:name
pub async fn hello_name(_request: Request<Body>, params: PathParams) -> HandlerResult {
    let name = params.get("name").map(String::as_str).unwrap_or_default();
    Ok(json_response(
        json!({ "message": format!("Hello, {name}!") }),
        StatusCode::OK,
    ))
}
