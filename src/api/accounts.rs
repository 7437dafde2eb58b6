//! Accounts resource handlers.
//!
//! # Responsibilities
//! - CRUD over the `accounts` flat-file collection
//! - Presence/type validation of request bodies (name: string)
//!
//! # Design Decisions
//! - Whole-collection read-modify-write per request; no record locking
//! - Client-visible failures (400, 404) are responses built here, not
//!   errors; only unexpected store failures propagate to the dispatcher

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::request::parse_json_body;
use crate::http::response::{empty_response, error_response, json_response};
use crate::routing::{HandlerResult, PathParams};
use crate::store::{generate_id, JsonStore};

/// Collection name under the data directory.
pub const RESOURCE: &str = "accounts";

const INVALID_ACCOUNT: &str = "Invalid account data: name is required and must be a string.";
const NOT_FOUND: &str = "Account not found";

/// A stored account record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
}

/// Pull a string `name` out of a parsed body, if the body held one.
fn account_name(body: Option<Value>) -> Option<String> {
    body?.get("name")?.as_str().map(str::to_string)
}

/// GET /api/accounts
pub async fn list(
    store: Arc<JsonStore>,
    _request: Request<Body>,
    _params: PathParams,
) -> HandlerResult {
    let accounts: Vec<Account> = store.read_all(RESOURCE).await?;
    Ok(json_response(accounts, StatusCode::OK))
}

/// POST /api/accounts
pub async fn create(
    store: Arc<JsonStore>,
    request: Request<Body>,
    _params: PathParams,
) -> HandlerResult {
    let Some(name) = account_name(parse_json_body(request).await) else {
        return Ok(error_response(INVALID_ACCOUNT, StatusCode::BAD_REQUEST));
    };

    let mut accounts: Vec<Account> = store.read_all(RESOURCE).await?;
    let account = Account {
        id: generate_id(),
        name,
    };
    accounts.push(account.clone());
    store.write_all(RESOURCE, &accounts).await?;

    tracing::info!(account_id = %account.id, "Account created");
    Ok(json_response(account, StatusCode::CREATED))
}

/// GET /api/accounts/:id
pub async fn fetch(
    store: Arc<JsonStore>,
    _request: Request<Body>,
    params: PathParams,
) -> HandlerResult {
    let id = params.get("id").map(String::as_str).unwrap_or_default();
    let accounts: Vec<Account> = store.read_all(RESOURCE).await?;

    match accounts.into_iter().find(|account| account.id == id) {
        Some(account) => Ok(json_response(account, StatusCode::OK)),
        None => Ok(error_response(NOT_FOUND, StatusCode::NOT_FOUND)),
    }
}

/// PUT /api/accounts/:id
pub async fn update(
    store: Arc<JsonStore>,
    request: Request<Body>,
    params: PathParams,
) -> HandlerResult {
    let Some(name) = account_name(parse_json_body(request).await) else {
        return Ok(error_response(INVALID_ACCOUNT, StatusCode::BAD_REQUEST));
    };

    let id = params.get("id").map(String::as_str).unwrap_or_default();
    let mut accounts: Vec<Account> = store.read_all(RESOURCE).await?;

    let Some(account) = accounts.iter_mut().find(|account| account.id == id) else {
        return Ok(error_response(NOT_FOUND, StatusCode::NOT_FOUND));
    };
    account.name = name;
    let updated = account.clone();
    store.write_all(RESOURCE, &accounts).await?;

    tracing::info!(account_id = %updated.id, "Account updated");
    Ok(json_response(updated, StatusCode::OK))
}

/// DELETE /api/accounts/:id
pub async fn remove(
    store: Arc<JsonStore>,
    _request: Request<Body>,
    params: PathParams,
) -> HandlerResult {
    let id = params.get("id").map(String::as_str).unwrap_or_default();
    let mut accounts: Vec<Account> = store.read_all(RESOURCE).await?;

    let Some(index) = accounts.iter().position(|account| account.id == id) else {
        return Ok(error_response(NOT_FOUND, StatusCode::NOT_FOUND));
    };
    accounts.remove(index);
    store.write_all(RESOURCE, &accounts).await?;

    tracing::info!(account_id = %id, "Account deleted");
    Ok(empty_response(StatusCode::NO_CONTENT))
}
