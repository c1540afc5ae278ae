//! Shared types for Lectern

pub mod error;

pub use error::{ErrorBody, LecternError, Result};
