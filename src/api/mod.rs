//! API surface: the route table and its handlers.
//!
//! # Data Flow
//! ```text
//! routes(store)
//!     → ordered Vec<Route> (pattern + method → handler)
//!     → RouteTable, frozen at startup
//!
//! accounts.rs — flat-file CRUD handlers
//! system.rs   — liveness and demo handlers
//! ```
//!
//! # Design Decisions
//! - Handlers close over the shared store; the router stays storage-agnostic
//! - Patterns are mutually exclusive by segment count and literals, so
//!   table order is not load-bearing — but first-match-wins still holds

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

use crate::routing::{HandlerResult, PathParams, Route, RouteTable};
use crate::store::JsonStore;

pub mod accounts;
pub mod system;

/// Build the route table over the given store.
pub fn routes(store: Arc<JsonStore>) -> RouteTable {
    RouteTable::new(vec![
        Route::new("/api").get(system::index),
        Route::new("/api/healthcheck").get(system::healthcheck),
        Route::new("/api/hello")
            .get(system::hello)
            .post(system::hello_post),
        Route::new("/api/hello/:name").get(system::hello_name),
        Route::new("/api/accounts")
            .get(with_store(&store, accounts::list))
            .post(with_store(&store, accounts::create)),
        Route::new("/api/accounts/:id")
            .get(with_store(&store, accounts::fetch))
            .put(with_store(&store, accounts::update))
            .delete(with_store(&store, accounts::remove)),
    ])
}

/// Adapt a store-taking handler fn to the router's handler signature.
fn with_store<F, Fut>(
    store: &Arc<JsonStore>,
    handler: F,
) -> impl Fn(Request<Body>, PathParams) -> Fut + Send + Sync + 'static
where
    F: Fn(Arc<JsonStore>, Request<Body>, PathParams) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    let store = store.clone();
    move |request, params| handler(store.clone(), request, params)
}
