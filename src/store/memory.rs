//! In-memory record store
//!
//! Holds every library record behind a plain map. Used in preload mode,
//! where the full dataset is read once at startup, and as the fixture
//! store in tests. Records are immutable after insertion, so lookups
//! hand out shared `Arc`s with no locking.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::LibraryStore;
use crate::model::Library;
use crate::types::Result;

/// Immutable map of library records keyed by name.
#[derive(Debug)]
pub struct MemoryStore {
    records: HashMap<String, Arc<Library>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Build a store from a set of records.
    pub fn from_records(records: impl IntoIterator<Item = Library>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Insert a record, replacing any existing record of the same name.
    pub fn insert(&mut self, record: Library) {
        super::log_integrity_warnings(&record);
        self.records.insert(record.name.clone(), Arc::new(record));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load every `*.json` record under `dir`.
    ///
    /// Preload mode wants the full dataset or nothing, so the first
    /// unreadable or unparsable record fails the load.
    pub async fn load_dir(dir: &Path) -> Result<Self> {
        let mut store = Self::new();
        let mut entries = tokio::fs::read_dir(dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let bytes = tokio::fs::read(&path).await?;
            let record: Library = serde_json::from_slice(&bytes)?;
            debug!(library = %record.name, file = %path.display(), "Loaded record");
            store.insert(record);
        }

        info!(
            "Loaded {} library record(s) from {}",
            store.len(),
            dir.display()
        );
        Ok(store)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LibraryStore for MemoryStore {
    async fn get_library(&self, name: &str) -> Option<Arc<Library>> {
        self.records.get(name).map(Arc::clone)
    }
}
