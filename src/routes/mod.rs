//! HTTP routes for Lectern

pub mod health;
pub mod libraries;

pub use health::{health_check, index_info, version_info};
pub use libraries::{handle_library_request, not_found_response};
