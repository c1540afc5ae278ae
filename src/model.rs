//! Library metadata records
//!
//! A [`Library`] record carries everything the API serves for one library:
//! descriptive metadata, the versioned assets, and the tutorials. Records
//! are loaded from JSON and served as-is; the route layer projects fields
//! but never rewrites record content.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A hosted library with its published assets and tutorials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Library {
    /// Canonical library identifier (e.g. "backbone.js")
    pub name: String,
    /// Fully-qualified content URL of the current default file
    pub latest: String,
    /// Integrity string for the latest asset's default file
    pub sri: String,
    /// Default file name within an asset
    pub filename: String,
    /// Current version identifier; matches one entry in `assets`
    pub version: String,
    pub description: String,
    pub homepage: String,
    pub keywords: Vec<String>,
    pub repository: Repository,
    pub license: String,
    pub author: String,
    pub autoupdate: Autoupdate,
    /// Published versions, in store order
    pub assets: Vec<LibraryVersion>,
    /// Tutorials, in store order; a library without tutorials carries an
    /// empty list, never a missing key
    #[serde(default)]
    pub tutorials: Vec<Tutorial>,
}

/// Source repository reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// Upstream auto-update configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Autoupdate {
    #[serde(rename = "type")]
    pub kind: String,
    pub target: String,
}

/// One published version of a library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryVersion {
    /// Version identifier, unique within the library
    pub version: String,
    /// Served file paths for this version
    pub files: Vec<String>,
    /// File paths before minification/processing
    #[serde(rename = "rawFiles")]
    pub raw_files: Vec<String>,
    /// Integrity string per entry of `files`
    pub sri: BTreeMap<String, String>,
}

/// A tutorial attached to a library.
///
/// Beyond the fixed `id`/`name`/`content`, tutorials carry open-ended
/// metadata which serializes inline and participates in field projection
/// like any other key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutorial {
    /// URL-safe slug, unique within the library
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl Library {
    /// Look up an asset by exact version string.
    pub fn asset(&self, version: &str) -> Option<&LibraryVersion> {
        self.assets.iter().find(|a| a.version == version)
    }

    /// Look up a tutorial by exact slug.
    pub fn tutorial(&self, id: &str) -> Option<&Tutorial> {
        self.tutorials.iter().find(|t| t.id == id)
    }
}

impl LibraryVersion {
    /// Whether the `sri` map keys are exactly the entries of `files`.
    ///
    /// Records violating this are still served; store adapters log a
    /// warning when they load one.
    pub fn sri_covers_files(&self) -> bool {
        self.sri.len() == self.files.len() && self.files.iter().all(|f| self.sri.contains_key(f))
    }
}
