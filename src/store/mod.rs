//! Persistence subsystem.
//!
//! # Data Flow
//! ```text
//! Handler
//!     → json_file.rs (read_all: whole collection from disk)
//!     → mutate in memory
//!     → json_file.rs (write_all: whole collection back)
//!
//! ids.rs supplies record IDs on create.
//! ```
//!
//! # Design Decisions
//! - One JSON file per resource, array of records
//! - Read-modify-write is not serialized here; a single-writer deployment
//!   is assumed
//! - Missing files read as empty collections so a fresh data dir works
//!   without seeding

pub mod ids;
pub mod json_file;

pub use ids::generate_id;
pub use json_file::{JsonStore, StoreError};
