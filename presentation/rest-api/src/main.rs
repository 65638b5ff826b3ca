use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// HTTP Gateway Entry Point
///
/// Re-exposes the gRPC product catalog as JSON routes. The gateway owns no
/// business rules; it decodes bodies, calls the catalog and maps statuses.
///
/// - config/: Application configuration (server, CORS, catalog client)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and status mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Connect the catalog client
    let client = config.catalog.connect()?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(client);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
