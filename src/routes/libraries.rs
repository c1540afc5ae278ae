//! Library metadata endpoints
//!
//! ## Routes
//!
//! - `GET /libraries/{library}` - Full library record
//! - `GET /libraries/{library}/{version}` - One versioned asset
//! - `GET /libraries/{library}/tutorials` - Tutorial list
//! - `GET /libraries/{library}/tutorials/{tutorial}` - One tutorial
//!
//! Every route accepts `?fields=` to trim the response object; every
//! response carries the open CORS grant and a cache policy keyed to the
//! resource class. Lookup failures answer with a fixed-message 404
//! envelope, and an outer failure masks inner segments: asking for a
//! version of a missing library reports the library as missing.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

use crate::fields::{self, FieldDirective};
use crate::policy::{self, ResourceClass};
use crate::resolve::{Outcome, ResourcePath};
use crate::server::AppState;
use crate::types::ErrorBody;

/// Version endpoint payload: the asset joined with its library's name.
#[derive(Serialize)]
struct VersionBody<'a> {
    name: &'a str,
    version: &'a str,
    files: &'a [String],
    #[serde(rename = "rawFiles")]
    raw_files: &'a [String],
    sri: &'a BTreeMap<String, String>,
}

/// Handle GET /libraries/{library} and everything beneath it.
///
/// Returns `None` when the path is not a library route, so the router can
/// fall through to the endpoint 404.
pub async fn handle_library_request(
    state: Arc<AppState>,
    path: &str,
    query: Option<&str>,
) -> Option<Response<Full<Bytes>>> {
    let route = ResourcePath::parse(path)?;

    let params = parse_query_params(query.unwrap_or(""));
    let directive = FieldDirective::parse(params.get("fields").map(|v| v.as_str()));

    debug!(library = route.library(), "Resolving library route");
    let outcome = state.resolver.resolve(&route).await;

    Some(match outcome {
        Outcome::Library(library) => {
            let value = serde_json::to_value(&*library).unwrap_or_default();
            projected_response(ResourceClass::Library, value, &directive)
        }
        Outcome::Version(library, asset) => {
            let body = VersionBody {
                name: &library.name,
                version: &asset.version,
                files: &asset.files,
                raw_files: &asset.raw_files,
                sri: &asset.sri,
            };
            let value = serde_json::to_value(&body).unwrap_or_default();
            projected_response(ResourceClass::Version, value, &directive)
        }
        Outcome::TutorialList(library) => {
            // List elements always keep their slug so the list stays
            // addressable, even under an explicit selection
            let directive = directive.with_required("id");
            let value = serde_json::to_value(&library.tutorials).unwrap_or_default();
            projected_response(ResourceClass::TutorialList, value, &directive)
        }
        Outcome::Tutorial(_, tutorial) => {
            let value = serde_json::to_value(&tutorial).unwrap_or_default();
            projected_response(ResourceClass::Tutorial, value, &directive)
        }
        Outcome::NotFound(kind) => {
            debug!(library = route.library(), kind = ?kind, "Lookup failed");
            not_found_response(kind.not_found_message())
        }
    })
}

/// Project a serialized record and wrap it in a 200 with the class's
/// cache policy.
fn projected_response(
    class: ResourceClass,
    value: serde_json::Value,
    directive: &FieldDirective,
) -> Response<Full<Bytes>> {
    let projected = fields::project(value, directive);
    let body = serde_json::to_vec(&projected).unwrap_or_default();
    json_response(class, body)
}

/// Build a successful JSON response
fn json_response(class: ResourceClass, body: Vec<u8>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Cache-Control", policy::success_cache_control(class))
        .header("Access-Control-Allow-Origin", policy::ALLOW_ORIGIN)
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

/// Build a not-found JSON response with the error cache policy
pub fn not_found_response(message: &'static str) -> Response<Full<Bytes>> {
    let body = serde_json::to_vec(&ErrorBody::not_found(message)).unwrap_or_default();

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Cache-Control", policy::error_cache_control())
        .header("Access-Control-Allow-Origin", policy::ALLOW_ORIGIN)
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|_| {
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Full::new(Bytes::from(r#"{"error":"Internal error"}"#)))
                .unwrap()
        })
}

/// Parse query string into key-value map, percent-decoding values
fn parse_query_params(query: &str) -> HashMap<String, String> {
    if query.is_empty() {
        return HashMap::new();
    }

    query
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let value = parts.next().unwrap_or("");
            Some((key.to_string(), decode_value(value)))
        })
        .collect()
}

fn decode_value(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}
