use dotenvy::dotenv;

mod config;
mod setup;

use config::{database_config, grpc_config::GrpcConfig};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// gRPC Catalog Entry Point
///
/// Initializes tracing, loads configuration, opens the product store and
/// serves `catalog.v1.ProductService` until Ctrl-C.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = GrpcConfig::from_env();

    // 4. Open the product store
    let repository = database_config::init_repository().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(repository);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
