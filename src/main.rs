//! Lectern - read-only metadata API for hosted libraries

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lectern::{
    config::Args,
    server,
    store::{DiskStore, LibraryStore, MemoryStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("lectern={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // Print startup banner
    info!("======================================");
    info!("  Lectern - Library Metadata API");
    info!("======================================");
    info!("Listen: {}", args.listen);
    info!("Data dir: {}", args.data_dir.display());
    info!("Store: {}", if args.preload { "preload" } else { "disk" });
    info!("======================================");

    // Build the record store
    let (store, store_mode, library_count): (Arc<dyn LibraryStore>, &'static str, Option<usize>) =
        if args.preload {
            match MemoryStore::load_dir(&args.data_dir).await {
                Ok(store) => {
                    let count = store.len();
                    (Arc::new(store), "preload", Some(count))
                }
                Err(e) => {
                    error!("Failed to preload records: {}", e);
                    std::process::exit(1);
                }
            }
        } else {
            (Arc::new(DiskStore::new(args.data_dir.clone())), "disk", None)
        };

    // Create application state
    let mut state = server::AppState::new(args, store, store_mode);
    state.library_count = library_count;
    let state = Arc::new(state);

    // Run the server
    if let Err(e) = server::run(state).await {
        error!("Server error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
