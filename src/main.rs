//! Main entry point for the application.
//!
//! This binary initializes logging, loads environment variables, resolves
//! the database location, and serves the author API over HTTP until the
//! process is stopped.

use clap::Parser;
use pubapi::{api, cli, utils};
use tracing::{error, info, warn};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Initialize logging system
/// 3. Load environment variables
/// 4. Resolve the database URL (flag, then DATABASE_URL, then "pubapi.db")
/// 5. Run the HTTP server
#[tokio::main]
async fn main() {
    let cli = cli::Cli::try_parse().expect("Failed to parse CLI arguments");
    utils::init_logging(&cli.logging_level, cli.log_to_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    let database_url = cli.database_url.unwrap_or_else(|| {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "pubapi.db".to_string())
    });

    info!("Starting API server on port {}", cli.port);
    if let Err(e) = api::server::launch_server(cli.port, &database_url).await {
        error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
