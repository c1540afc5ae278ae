//! Record store adapters
//!
//! The resolver reads library records through the [`LibraryStore`] trait
//! and never learns which adapter serves it. Two adapters ship:
//!
//! - [`MemoryStore`]: every record held in memory; preload mode and tests
//! - [`DiskStore`]: lazy per-request read of one JSON file per library

pub mod disk;
pub mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;

use crate::model::Library;
use std::sync::Arc;
use tracing::warn;

/// Read-only access to library records.
#[async_trait::async_trait]
pub trait LibraryStore: Send + Sync {
    /// Fetch a library record by exact name.
    ///
    /// Returns `None` when the library does not exist or the backing
    /// record cannot be served; adapter faults never escape as errors.
    async fn get_library(&self, name: &str) -> Option<Arc<Library>>;
}

/// Log a warning for each asset whose sri map disagrees with its files
/// list. The record is still served as stored.
pub(crate) fn log_integrity_warnings(record: &Library) {
    for asset in &record.assets {
        if !asset.sri_covers_files() {
            warn!(
                library = %record.name,
                version = %asset.version,
                "Asset sri map does not match files list"
            );
        }
    }
}
