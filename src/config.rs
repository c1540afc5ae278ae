//! Configuration for Lectern
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Lectern - read-only metadata API for hosted libraries
#[derive(Parser, Debug, Clone)]
#[command(name = "lectern")]
#[command(about = "Read-only metadata API for hosted libraries and their tutorials")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:5050")]
    pub listen: SocketAddr,

    /// Directory holding one JSON record per library
    #[arg(long, env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Load every record into memory at startup instead of reading
    /// per request
    #[arg(long, env = "PRELOAD", default_value = "false")]
    pub preload: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.data_dir.is_dir() {
            return Err(format!(
                "DATA_DIR is not a directory: {}",
                self.data_dir.display()
            ));
        }

        Ok(())
    }
}
