//! Route table and request dispatch.
//!
//! # Responsibilities
//! - Store the ordered route table (pattern + method → handler)
//! - Resolve a request to a handler invocation or an explicit negative
//! - Translate outcomes into status codes (404, 405 with `Allow`, 500)
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Linear scan in registration order; first matching pattern wins and
//!   later overlapping routes are never consulted, even for other methods
//! - Handlers are async and awaited one at a time per request
//! - Handler errors never reach the client; they are logged here and
//!   surfaced as a generic 500

use std::future::Future;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;

use crate::http::response::error_response;
use crate::routing::matcher::{match_path, PathParams};

/// Error type at the handler/dispatch seam.
pub type HandlerError = tower::BoxError;

/// What a handler invocation produces.
pub type HandlerResult = Result<Response, HandlerError>;

/// A registered handler: takes the request and captured path parameters.
pub type BoxedHandler =
    Box<dyn Fn(Request<Body>, PathParams) -> BoxFuture<'static, HandlerResult> + Send + Sync>;

/// A single route: one pattern, one handler per HTTP method.
///
/// Methods are kept in registration order so the `Allow` header of a 405
/// reflects how the route was declared.
pub struct Route {
    pattern: String,
    handlers: Vec<(Method, BoxedHandler)>,
}

impl Route {
    /// Create a route for the given pattern with no handlers yet.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handlers: Vec::new(),
        }
    }

    /// Register a handler for an HTTP method on this route.
    pub fn on<H, Fut>(mut self, method: Method, handler: H) -> Self
    where
        H: Fn(Request<Body>, PathParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.handlers.push((
            method,
            Box::new(move |request, params| {
                Box::pin(handler(request, params)) as BoxFuture<'static, HandlerResult>
            }),
        ));
        self
    }

    /// Register a GET handler.
    pub fn get<H, Fut>(self, handler: H) -> Self
    where
        H: Fn(Request<Body>, PathParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.on(Method::GET, handler)
    }

    /// Register a POST handler.
    pub fn post<H, Fut>(self, handler: H) -> Self
    where
        H: Fn(Request<Body>, PathParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.on(Method::POST, handler)
    }

    /// Register a PUT handler.
    pub fn put<H, Fut>(self, handler: H) -> Self
    where
        H: Fn(Request<Body>, PathParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.on(Method::PUT, handler)
    }

    /// Register a DELETE handler.
    pub fn delete<H, Fut>(self, handler: H) -> Self
    where
        H: Fn(Request<Body>, PathParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.on(Method::DELETE, handler)
    }

    /// The pattern this route matches.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Methods registered on this route, in registration order.
    pub fn methods(&self) -> Vec<Method> {
        self.handlers.iter().map(|(m, _)| m.clone()).collect()
    }

    fn handler_for(&self, method: &Method) -> Option<&BoxedHandler> {
        self.handlers
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, h)| h)
    }
}

/// Outcome of resolving a path and method against the table.
pub enum Resolution<'a> {
    /// First route whose pattern matched, with a handler for the method.
    Matched {
        handler: &'a BoxedHandler,
        pattern: &'a str,
        params: PathParams,
    },
    /// A pattern matched but had no handler for the method. Carries the
    /// methods that are registered, for the `Allow` header.
    MethodNotAllowed { allowed: Vec<Method> },
    /// No pattern in the table matched the path.
    NotFound,
}

/// The ordered, immutable route table.
///
/// Built once at startup and shared by reference; resolution takes `&self`
/// and requests dispatch concurrently without coordination.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from routes in matching order.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Resolve a path and method to a handler or a negative outcome.
    ///
    /// The first route whose pattern matches the path decides the outcome;
    /// a missing method on that route is final and does not fall through to
    /// later routes.
    pub fn resolve(&self, path: &str, method: &Method) -> Resolution<'_> {
        for route in &self.routes {
            if let Some(params) = match_path(&route.pattern, path) {
                return match route.handler_for(method) {
                    Some(handler) => Resolution::Matched {
                        handler,
                        pattern: &route.pattern,
                        params,
                    },
                    None => Resolution::MethodNotAllowed {
                        allowed: route.methods(),
                    },
                };
            }
        }
        Resolution::NotFound
    }

    /// Dispatch a request to its handler and produce the response.
    ///
    /// This is the single point translating internal outcomes into
    /// externally visible status codes.
    pub async fn dispatch(&self, request: Request<Body>) -> Response {
        let path = request.uri().path().to_string();
        let method = request.method().clone();

        match self.resolve(&path, &method) {
            Resolution::Matched {
                handler,
                pattern,
                params,
            } => match handler(request, params).await {
                Ok(response) => response,
                Err(error) => {
                    tracing::error!(
                        method = %method,
                        path = %path,
                        route = pattern,
                        error = %error,
                        "Handler failed"
                    );
                    error_response("Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR)
                }
            },
            Resolution::MethodNotAllowed { allowed } => {
                let allow = allowed
                    .iter()
                    .map(Method::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                tracing::debug!(method = %method, path = %path, allow = %allow, "Method not allowed");
                (
                    StatusCode::METHOD_NOT_ALLOWED,
                    [(header::ALLOW, allow)],
                    "Method not allowed",
                )
                    .into_response()
            }
            Resolution::NotFound => {
                tracing::debug!(method = %method, path = %path, "No route matched");
                (StatusCode::NOT_FOUND, "API Endpoint Not Found").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn request(method: Method, path: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap()
    }

    fn text_route(pattern: &str, body: &'static str) -> Route {
        Route::new(pattern).get(move |_req, _params| async move { Ok(body.into_response()) })
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn first_matching_route_wins() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_first = hits.clone();
        let table = RouteTable::new(vec![
            Route::new("/items/:id").get(move |_req, _params| {
                hits_first.fetch_add(1, Ordering::SeqCst);
                async move { Ok("first".into_response()) }
            }),
            text_route("/items/:name", "second"),
        ]);

        let response = table.dispatch(request(Method::GET, "/items/7")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "first");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn params_reach_the_handler() {
        let table = RouteTable::new(vec![Route::new("/users/:userId/posts/:postId").get(
            |_req, params: PathParams| async move {
                assert_eq!(params.len(), 2);
                assert_eq!(params["userId"], "123");
                assert_eq!(params["postId"], "456");
                Ok("ok".into_response())
            },
        )]);

        let response = table
            .dispatch(request(Method::GET, "/users/123/posts/456"))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_method_is_405_with_allow_header() {
        let table = RouteTable::new(vec![text_route("/items", "listing")]);

        let response = table.dispatch(request(Method::POST, "/items")).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "GET");
    }

    #[tokio::test]
    async fn missing_method_does_not_fall_through() {
        // The second route would accept POST /items, but the first match is final.
        let table = RouteTable::new(vec![
            text_route("/items", "listing"),
            Route::new("/items")
                .post(|_req, _params| async move { Ok("created".into_response()) }),
        ]);

        let response = table.dispatch(request(Method::POST, "/items")).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unmatched_path_is_404() {
        let table = RouteTable::new(vec![text_route("/items", "listing")]);

        let response = table.dispatch(request(Method::GET, "/missing")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn handler_error_becomes_generic_500() {
        let table = RouteTable::new(vec![Route::new("/broken").get(|_req, _params| async move {
            Err::<Response, HandlerError>("database exploded: secret detail".into())
        })]);

        let response = table.dispatch(request(Method::GET, "/broken")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert!(body.contains("Internal Server Error"));
        assert!(!body.contains("secret detail"));
    }

    #[tokio::test]
    async fn allow_header_lists_methods_in_registration_order() {
        let table = RouteTable::new(vec![Route::new("/items")
            .get(|_req, _params| async move { Ok("listing".into_response()) })
            .post(|_req, _params| async move { Ok("created".into_response()) })
            .delete(|_req, _params| async move { Ok("gone".into_response()) })]);

        let response = table.dispatch(request(Method::PUT, "/items")).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get(header::ALLOW).unwrap(),
            "GET, POST, DELETE"
        );
    }
}
