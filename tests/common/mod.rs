//! Shared fixtures and helpers for the integration suites
//!
//! Builds an in-memory store with a realistic record set and drives the
//! public router directly, without a socket.

use std::collections::BTreeMap;
use std::sync::Arc;

use bytes::Bytes;
use clap::Parser;
use http_body_util::{BodyExt, Full};
use hyper::{Method, Response};

use lectern::config::Args;
use lectern::model::{Autoupdate, Library, LibraryVersion, Repository, Tutorial};
use lectern::server::{self, AppState};
use lectern::store::MemoryStore;

/// backbone.js record: two published versions and one tutorial carrying
/// extra metadata.
pub fn backbone() -> Library {
    let mut sri_161 = BTreeMap::new();
    sri_161.insert(
        "backbone-min.js".to_string(),
        "sha512-TJVUcPCHKx2VFUkXc3o4f+5GSRnP8OWuyVkBcalzpCSaeRTFre737sBbeIWA1aF+1s9yMNYFjYbrrLbtnFmHNw==".to_string(),
    );
    sri_161.insert(
        "backbone.js".to_string(),
        "sha512-1sDWcB62iMT9Fa6dhPnRFouq5KMUtJoyOnkyB1xPnXU9+utXDxzBw1bbrtWnu1aGRfsgmtvcZWIK9HZmn1JQWA==".to_string(),
    );

    let mut sri_110 = BTreeMap::new();
    sri_110.insert(
        "backbone-min.js".to_string(),
        "sha512-s4v6sx23M2aWAxAjZCy2w9hOmTaPDBLkbaDMa3kc6cizeKWGXWaXJmLDDc/2+fyxUxAjVnbBPLQe0PrehXWnig==".to_string(),
    );
    sri_110.insert(
        "backbone-min.map".to_string(),
        "sha512-NcCr50iTL6cdw21hS1pxBBv4W9rnDEIIVFpCwtC0K3OAsTTjpBEXvm6HqLLgAGJ2RlKmW3zLolW6HYyZCFDMlg==".to_string(),
    );
    sri_110.insert(
        "backbone.js".to_string(),
        "sha512-PiPiH6uk1D1Lyr6Atq0dkzRRartmXLJxmvavGkkUjHBSxumsJqDmSSk8sCiIFkYqkbP1FbsIFZGXvLBBbEELvA==".to_string(),
    );

    let mut metadata = serde_json::Map::new();
    metadata.insert("author".to_string(), serde_json::json!("thomasdavis"));

    Library {
        name: "backbone.js".to_string(),
        latest: "https://cdnjs.cloudflare.com/ajax/libs/backbone.js/1.6.1/backbone-min.js"
            .to_string(),
        sri: "sha512-TJVUcPCHKx2VFUkXc3o4f+5GSRnP8OWuyVkBcalzpCSaeRTFre737sBbeIWA1aF+1s9yMNYFjYbrrLbtnFmHNw=="
            .to_string(),
        filename: "backbone-min.js".to_string(),
        version: "1.6.1".to_string(),
        description: "Give your JS App some Backbone with Models, Views, Collections, and Events."
            .to_string(),
        homepage: "https://backbonejs.org".to_string(),
        keywords: vec![
            "model".to_string(),
            "view".to_string(),
            "controller".to_string(),
            "mvc".to_string(),
            "collection".to_string(),
            "client".to_string(),
            "browser".to_string(),
        ],
        repository: Repository {
            kind: "git".to_string(),
            url: "https://github.com/jashkenas/backbone.git".to_string(),
        },
        license: "MIT".to_string(),
        author: "Jeremy Ashkenas".to_string(),
        autoupdate: Autoupdate {
            kind: "npm".to_string(),
            target: "backbone".to_string(),
        },
        assets: vec![
            LibraryVersion {
                version: "1.6.1".to_string(),
                files: vec!["backbone-min.js".to_string(), "backbone.js".to_string()],
                raw_files: vec!["backbone.js".to_string()],
                sri: sri_161,
            },
            LibraryVersion {
                version: "1.1.0".to_string(),
                files: vec![
                    "backbone-min.js".to_string(),
                    "backbone-min.map".to_string(),
                    "backbone.js".to_string(),
                ],
                raw_files: vec!["backbone.js".to_string()],
                sri: sri_110,
            },
        ],
        tutorials: vec![Tutorial {
            id: "what-is-a-view".to_string(),
            name: "What is a view?".to_string(),
            content: "<h2>What is a view?</h2>\n<p>Views are the atom of a Backbone interface.</p>"
                .to_string(),
            metadata,
        }],
    }
}

/// vue record: one published version, no tutorials.
pub fn vue() -> Library {
    let mut sri = BTreeMap::new();
    sri.insert(
        "vue.min.js".to_string(),
        "sha512-BKbSR8cDnGGIkjmYRLGHjxiXGWjWjvNevJ6ygo4LLL2iyUNja918sdBPHxIRrkvmCIXoQ+NsDwSRkizSCQ8Jsw==".to_string(),
    );
    sri.insert(
        "vue.js".to_string(),
        "sha512-+i5dAv2T9PCFKfmUOe2aGdzC6fIDCHe0jWKpZmGrTTLXd9dJMhrXvbDvjCRB3LFvVxBnzKUG00aVXLCSV1HYQQ==".to_string(),
    );

    Library {
        name: "vue".to_string(),
        latest: "https://cdnjs.cloudflare.com/ajax/libs/vue/2.6.14/vue.min.js".to_string(),
        sri: "sha512-BKbSR8cDnGGIkjmYRLGHjxiXGWjWjvNevJ6ygo4LLL2iyUNja918sdBPHxIRrkvmCIXoQ+NsDwSRkizSCQ8Jsw=="
            .to_string(),
        filename: "vue.min.js".to_string(),
        version: "2.6.14".to_string(),
        description: "Simple, Fast & Composable MVVM for building interactive interfaces"
            .to_string(),
        homepage: "https://vuejs.org".to_string(),
        keywords: vec!["vue".to_string(), "mvvm".to_string(), "browser".to_string()],
        repository: Repository {
            kind: "git".to_string(),
            url: "https://github.com/vuejs/vue.git".to_string(),
        },
        license: "MIT".to_string(),
        author: "Evan You".to_string(),
        autoupdate: Autoupdate {
            kind: "npm".to_string(),
            target: "vue".to_string(),
        },
        assets: vec![LibraryVersion {
            version: "2.6.14".to_string(),
            files: vec!["vue.js".to_string(), "vue.min.js".to_string()],
            raw_files: vec!["vue.js".to_string(), "vue.min.js".to_string()],
            sri,
        }],
        tutorials: vec![],
    }
}

/// Router state over an in-memory store holding the fixture records.
pub fn test_state() -> Arc<AppState> {
    let store = MemoryStore::from_records([backbone(), vue()]);
    let args = Args::parse_from(["lectern"]);
    Arc::new(AppState::new(args, Arc::new(store), "preload"))
}

/// Drive the router with a GET against a target like
/// `/libraries/backbone.js?fields=name`.
pub async fn get(state: &Arc<AppState>, target: &str) -> Response<Full<Bytes>> {
    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    };
    server::route(Arc::clone(state), Method::GET, path, query).await
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Full<Bytes>>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a header as a string, panicking when absent.
pub fn header(response: &Response<Full<Bytes>>, name: &str) -> String {
    response
        .headers()
        .get(name)
        .unwrap_or_else(|| panic!("missing header: {}", name))
        .to_str()
        .unwrap()
        .to_string()
}
