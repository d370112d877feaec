/// Venture Platform backend
///
/// Main entry point. Loads configuration from the environment and starts
/// the HTTP server.

use venture_platform::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Project API at /api/projects
/// - Authentication API at /api/auth/*
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:8080 and sqlite://data/app.db)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
