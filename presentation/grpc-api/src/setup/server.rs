use std::net::SocketAddr;

use grpc_api::router::router;

use crate::{config::grpc_config::GrpcConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: GrpcConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr: SocketAddr = config.bind_address().parse()?;

        tracing::info!(%addr, timeout = ?config.request_timeout, "gRPC catalog listening");

        router(config.request_timeout, container.product_service)
            .serve_with_shutdown(addr, shutdown_signal())
            .await?;

        tracing::info!("gRPC catalog stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
