//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware, catch-all handler)
//!     → request.rs (request ID, JSON body parsing)
//!     → [routing layer picks the handler]
//!     → response.rs (JSON / error / empty response helpers)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{parse_json_body, RequestIdExt, MAX_BODY_BYTES, X_REQUEST_ID};
pub use server::HttpServer;
