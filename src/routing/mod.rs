//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, method)
//!     → router.rs (ordered table scan)
//!     → matcher.rs (pattern vs path, capture :name params)
//!     → Return: handler + params, MethodNotAllowed, or NotFound
//!
//! Table Construction (at startup):
//!     Route::new(pattern).get(..).post(..)
//!     → RouteTable::new(routes)
//!     → Freeze as immutable table, shared via Arc
//! ```
//!
//! # Design Decisions
//! - Table built at startup, immutable at runtime
//! - No regex; segment-wise comparison only
//! - Deterministic: first matching pattern wins, no fallthrough
//! - Matcher is a pure function, separately testable

pub mod matcher;
pub mod router;

pub use matcher::{match_path, PathParams};
pub use router::{HandlerError, HandlerResult, Resolution, Route, RouteTable};
