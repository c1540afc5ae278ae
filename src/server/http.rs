//! HTTP server implementation
//!
//! Uses hyper http1 with TokioIo for async handling: one spawned task per
//! accepted connection, and a method/path match for dispatch. Handlers
//! share immutable state, so requests need no coordination.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Args;
use crate::resolve::Resolver;
use crate::routes;
use crate::store::LibraryStore;
use crate::types::LecternError;

/// Shared application state
pub struct AppState {
    pub args: Args,
    /// Resolver over the injected record store
    pub resolver: Resolver,
    /// Store mode served by this instance ("preload" or "disk")
    pub store_mode: &'static str,
    /// Libraries held in memory (preload mode only)
    pub library_count: Option<usize>,
    /// Process start, for uptime reporting
    pub started: Instant,
}

impl AppState {
    pub fn new(args: Args, store: Arc<dyn LibraryStore>, store_mode: &'static str) -> Self {
        Self {
            args,
            resolver: Resolver::new(store),
            store_mode,
            library_count: None,
            started: Instant::now(),
        }
    }
}

/// Start the HTTP server
pub async fn run(state: Arc<AppState>) -> Result<(), LecternError> {
    let listener = TcpListener::bind(state.args.listen).await?;

    info!("Lectern listening on {}", state.args.listen);

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);

                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(state, addr, req).await }
                    });

                    if let Err(err) = http1::Builder::new()
                        .preserve_header_case(true)
                        .title_case_headers(true)
                        .serve_connection(io, service)
                        .await
                    {
                        error!("Error serving connection from {}: {:?}", addr, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

/// Unwrap an incoming request and hand it to the router
async fn handle_request(
    state: Arc<AppState>,
    addr: SocketAddr,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(|q| q.to_string());

    info!("[{}] {} {}", addr, method, path);

    Ok(route(state, method, &path, query.as_deref()).await)
}

/// Dispatch a request to its handler.
///
/// Split from the connection plumbing so integration tests can drive the
/// full routing surface without a socket.
pub async fn route(
    state: Arc<AppState>,
    method: Method,
    path: &str,
    query: Option<&str>,
) -> Response<Full<Bytes>> {
    match (method, path) {
        // Liveness probe
        (Method::GET, "/health") | (Method::GET, "/healthz") => routes::health_check(state),

        // Version info for deployment verification
        (Method::GET, "/version") => routes::version_info(),

        // Service index
        (Method::GET, "/") => routes::index_info(),

        // CORS preflight
        (Method::OPTIONS, _) => preflight_response(),

        // Library metadata API
        (Method::GET, p) if p.starts_with("/libraries/") => {
            match routes::handle_library_request(state, p, query).await {
                Some(response) => response,
                None => routes::not_found_response("Endpoint not found"),
            }
        }

        // Everything else, including non-GET methods on known paths
        _ => routes::not_found_response("Endpoint not found"),
    }
}

/// CORS preflight response
fn preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", "*")
        .header("Access-Control-Allow-Methods", "GET, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap()
}
