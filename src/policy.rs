//! Response caching and CORS policy
//!
//! Every response carries the open CORS grant. Cache lifetimes are keyed
//! to how often a resource class can change: a published version is
//! immutable, library metadata moves with releases, tutorials sit in
//! between, and not-found answers stay short so new publishes surface.

/// CORS grant attached to every response
pub const ALLOW_ORIGIN: &str = "*";

const CACHE_VERSION: &str = "public, max-age=30672000, immutable"; // 355 days
const CACHE_LIBRARY: &str = "public, max-age=21600"; // 6 hours
const CACHE_TUTORIAL_LIST: &str = "public, max-age=86400"; // 24 hours
const CACHE_TUTORIAL: &str = "public, max-age=1209600"; // 2 weeks
const CACHE_ERROR: &str = "public, max-age=3600"; // 1 hour

/// Resource classes served by the library API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceClass {
    Library,
    Version,
    TutorialList,
    Tutorial,
}

/// Cache-control value for a successful response of the given class.
pub fn success_cache_control(class: ResourceClass) -> &'static str {
    match class {
        ResourceClass::Library => CACHE_LIBRARY,
        ResourceClass::Version => CACHE_VERSION,
        ResourceClass::TutorialList => CACHE_TUTORIAL_LIST,
        ResourceClass::Tutorial => CACHE_TUTORIAL,
    }
}

/// Cache-control value for every not-found response.
pub fn error_cache_control() -> &'static str {
    CACHE_ERROR
}
