//! Lectern - read-only metadata API for hosted libraries
//!
//! Lectern serves library records, their versioned assets, and their
//! tutorials over a small JSON API.
//!
//! ## Components
//!
//! - **Resolve**: hierarchical lookup across library → version / tutorial,
//!   short-circuiting so an outer miss masks inner segments
//! - **Fields**: the `fields` query parameter projects response objects
//!   down to a requested key set
//! - **Policy**: per-resource cache-control lifetimes with a constant
//!   CORS grant
//! - **Store**: pluggable record adapters — preloaded memory or lazy disk

pub mod config;
pub mod fields;
pub mod model;
pub mod policy;
pub mod resolve;
pub mod routes;
pub mod server;
pub mod store;
pub mod types;

pub use config::Args;
pub use server::{run, AppState};
pub use types::{LecternError, Result};
