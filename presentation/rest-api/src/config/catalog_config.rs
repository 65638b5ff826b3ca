use std::env;
use std::time::Duration;

use grpc_api::proto::product_service_client::ProductServiceClient;
use tonic::transport::{Channel, Endpoint};

const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:50051";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how to reach the gRPC product catalog
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub url: String,
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Load catalog client configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_GRPC_URL: Catalog endpoint (default: "http://127.0.0.1:50051")
    /// - CATALOG_GRPC_TIMEOUT_SECS: Per-call deadline (default: 10)
    pub fn from_env() -> Self {
        let url = env::var("CATALOG_GRPC_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        let timeout = env::var("CATALOG_GRPC_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            url,
            timeout: Duration::from_secs(timeout),
        }
    }

    /// Builds a lazily connected client; the first call opens the channel,
    /// so the gateway can start before the catalog is up.
    pub fn connect(&self) -> anyhow::Result<ProductServiceClient<Channel>> {
        let channel = Endpoint::from_shared(self.url.clone())?
            .timeout(self.timeout)
            .connect_timeout(self.timeout)
            .connect_lazy();

        Ok(ProductServiceClient::new(channel))
    }
}
