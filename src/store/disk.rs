//! Lazy filesystem record store
//!
//! Reads `<data_dir>/<name>.json` on each lookup, so records can be
//! swapped on disk without restarting the service. Read and parse
//! failures are logged and served as a miss; the resolver only ever sees
//! hit or miss.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use super::LibraryStore;
use crate::model::Library;

/// Per-request reader over a directory of JSON records.
pub struct DiskStore {
    data_dir: PathBuf,
}

impl DiskStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve the record file for a library name, refusing identifiers
    /// that could escape the data directory.
    fn record_path(&self, name: &str) -> Option<PathBuf> {
        if !safe_name(name) {
            debug!(library = name, "Rejected unsafe library identifier");
            return None;
        }
        Some(self.data_dir.join(format!("{}.json", name)))
    }
}

/// Library identifiers map straight to file names, so anything that
/// traverses directories is treated as a miss.
fn safe_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

#[async_trait::async_trait]
impl LibraryStore for DiskStore {
    async fn get_library(&self, name: &str) -> Option<Arc<Library>> {
        let path = self.record_path(name)?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(library = name, "No record file");
                return None;
            }
            Err(e) => {
                warn!(library = name, error = %e, "Failed to read record file");
                return None;
            }
        };

        match serde_json::from_slice::<Library>(&bytes) {
            Ok(record) => {
                super::log_integrity_warnings(&record);
                Some(Arc::new(record))
            }
            Err(e) => {
                warn!(library = name, error = %e, "Failed to parse record file");
                None
            }
        }
    }
}
