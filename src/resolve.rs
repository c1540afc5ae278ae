//! Hierarchical resource resolution
//!
//! Request paths under `/libraries/` decode into a typed [`ResourcePath`],
//! which the [`Resolver`] turns into an [`Outcome`] by walking the path
//! left to right against the record store. Resolution short-circuits on
//! the first segment that fails: a missing library always masks whatever
//! was asked for beneath it.

use std::sync::Arc;

use crate::model::{Library, LibraryVersion, Tutorial};
use crate::store::LibraryStore;

/// Typed decoding of a `/libraries/...` request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePath {
    /// `/libraries/{library}`
    Library { library: String },
    /// `/libraries/{library}/{version}`
    Version { library: String, version: String },
    /// `/libraries/{library}/tutorials`
    TutorialList { library: String },
    /// `/libraries/{library}/tutorials/{tutorial}`
    Tutorial { library: String, tutorial: String },
}

impl ResourcePath {
    /// Parse a request path into a typed resource path.
    ///
    /// Returns `None` for anything that is not a library route, letting
    /// the caller fall through to the endpoint 404. One trailing slash is
    /// tolerated; empty segments never match. The `tutorials` keyword is
    /// matched on the raw segment, then parameter segments are
    /// percent-decoded.
    pub fn parse(path: &str) -> Option<Self> {
        let stripped = path.strip_prefix("/libraries/")?;
        let stripped = stripped.strip_suffix('/').unwrap_or(stripped);

        let parts: Vec<&str> = stripped.split('/').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return None;
        }

        match parts.as_slice() {
            &[library] => Some(Self::Library {
                library: decode_segment(library),
            }),
            &[library, "tutorials"] => Some(Self::TutorialList {
                library: decode_segment(library),
            }),
            &[library, version] => Some(Self::Version {
                library: decode_segment(library),
                version: decode_segment(version),
            }),
            &[library, "tutorials", tutorial] => Some(Self::Tutorial {
                library: decode_segment(library),
                tutorial: decode_segment(tutorial),
            }),
            _ => None,
        }
    }

    /// The library segment every resource path starts with.
    pub fn library(&self) -> &str {
        match self {
            Self::Library { library }
            | Self::Version { library, .. }
            | Self::TutorialList { library }
            | Self::Tutorial { library, .. } => library,
        }
    }
}

/// Percent-decode a path segment, keeping the raw text when the encoding
/// is invalid.
fn decode_segment(segment: &str) -> String {
    match urlencoding::decode(segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    }
}

/// The resource kind a lookup failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Library,
    Version,
    Tutorial,
}

impl ResourceKind {
    /// Fixed client-facing message for this kind.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Self::Library => "Library not found",
            Self::Version => "Version not found",
            Self::Tutorial => "Tutorial not found",
        }
    }
}

/// Result of resolving a resource path against the store.
#[derive(Debug, Clone)]
pub enum Outcome {
    Library(Arc<Library>),
    Version(Arc<Library>, LibraryVersion),
    /// The library's tutorials in store order; an empty list is a
    /// success, not a miss
    TutorialList(Arc<Library>),
    Tutorial(Arc<Library>, Tutorial),
    NotFound(ResourceKind),
}

/// Resolves typed resource paths against an injected record store.
pub struct Resolver {
    store: Arc<dyn LibraryStore>,
}

impl Resolver {
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self { store }
    }

    /// Walk a resource path left to right, short-circuiting on the first
    /// segment that fails to match.
    ///
    /// Lookups are exact string matches; no case folding, no fuzziness.
    pub async fn resolve(&self, path: &ResourcePath) -> Outcome {
        let library = match self.store.get_library(path.library()).await {
            Some(library) => library,
            None => return Outcome::NotFound(ResourceKind::Library),
        };

        match path {
            ResourcePath::Library { .. } => Outcome::Library(library),
            ResourcePath::Version { version, .. } => match library.asset(version).cloned() {
                Some(asset) => Outcome::Version(library, asset),
                None => Outcome::NotFound(ResourceKind::Version),
            },
            ResourcePath::TutorialList { .. } => Outcome::TutorialList(library),
            ResourcePath::Tutorial { tutorial, .. } => match library.tutorial(tutorial).cloned() {
                Some(tutorial) => Outcome::Tutorial(library, tutorial),
                None => Outcome::NotFound(ResourceKind::Tutorial),
            },
        }
    }
}
