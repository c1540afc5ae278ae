//! Health and version endpoints
//!
//! Liveness probe plus build info for deployment verification. These sit
//! outside the library API surface, so they carry the CORS grant but no
//! cache policy.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;

use crate::server::AppState;

/// Liveness payload for /health and /healthz
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall health status (true if service is running)
    pub healthy: bool,
    /// Service version
    pub version: &'static str,
    /// Uptime in seconds
    pub uptime: u64,
    /// Current timestamp
    pub timestamp: String,
    /// Record store mode ("preload" or "disk")
    pub store: &'static str,
    /// Libraries held in memory (preload mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub libraries: Option<usize>,
}

/// Handle liveness probe (/health, /healthz)
///
/// Returns 200 OK whenever the service is running; the disk store needs
/// no warm connection, so liveness is the only probe.
pub fn health_check(state: Arc<AppState>) -> Response<Full<Bytes>> {
    let response = HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION"),
        uptime: state.started.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        store: state.store_mode,
        libraries: state.library_count,
    };

    let body = serde_json::to_string(&response)
        .unwrap_or_else(|_| r#"{"healthy":true,"error":"Serialization failed"}"#.to_string());

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

/// Version information for deployment verification
#[derive(Serialize)]
pub struct VersionResponse {
    /// Cargo package version
    pub version: &'static str,
    /// Git commit hash (short)
    pub commit: &'static str,
    /// Git commit hash (full)
    pub commit_full: &'static str,
    /// Build timestamp
    pub build_time: &'static str,
    /// Service name
    pub service: &'static str,
}

/// Handle version endpoint (/version)
pub fn version_info() -> Response<Full<Bytes>> {
    let response = VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("GIT_COMMIT_SHORT").unwrap_or("unknown"),
        commit_full: option_env!("GIT_COMMIT_FULL").unwrap_or("unknown"),
        build_time: option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
        service: "lectern",
    };

    let body = serde_json::to_string(&response)
        .unwrap_or_else(|_| r#"{"version":"unknown","commit":"unknown"}"#.to_string());

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

/// Service index served at /
#[derive(Serialize)]
pub struct IndexResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [&'static str],
}

/// Handle the service index (GET /)
pub fn index_info() -> Response<Full<Bytes>> {
    let response = IndexResponse {
        service: "lectern",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: &[
            "/libraries/{library}",
            "/libraries/{library}/{version}",
            "/libraries/{library}/tutorials",
            "/libraries/{library}/tutorials/{tutorial}",
            "/health",
            "/version",
        ],
    };

    let body = serde_json::to_string(&response)
        .unwrap_or_else(|_| r#"{"service":"lectern"}"#.to_string());

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}
