//! Flat-file JSON HTTP API server.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌─────────────────────────────────────────────┐
//!                    │                 API SERVER                  │
//!                    │                                             │
//!   Client Request   │  ┌─────────┐    ┌──────────────────┐       │
//!   ─────────────────┼─▶│  http   │───▶│     routing      │       │
//!                    │  │ server  │    │ match + dispatch │       │
//!                    │  └─────────┘    └────────┬─────────┘       │
//!                    │                          │                 │
//!                    │                          ▼                 │
//!                    │                  ┌──────────────┐          │
//!   Client Response  │                  │     api      │          │
//!   ◀────────────────┼──────────────────│   handlers   │          │
//!                    │                  └──────┬───────┘          │
//!                    │                         │                  │
//!                    │                         ▼                  │
//!                    │                  ┌──────────────┐          │
//!                    │                  │    store     │          │
//!                    │                  │ <res>.json   │          │
//!                    │                  └──────────────┘          │
//!                    │                                             │
//!                    │  ┌───────────────────────────────────────┐ │
//!                    │  │         Cross-Cutting Concerns        │ │
//!                    │  │   config · observability · lifecycle  │ │
//!                    │  └───────────────────────────────────────┘ │
//!                    └─────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod store;

pub use config::ApiConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
