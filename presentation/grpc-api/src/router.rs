use std::time::Duration;

use tonic::transport::Server;
use tonic::transport::server::Router;

use crate::product::service::ProductGrpcService;
use crate::proto::product_service_server::ProductServiceServer;

/// Builds the catalog router. Requests still running after
/// `request_timeout` are dropped, along with any store call in flight, and
/// the caller receives a non-OK status.
pub fn router(request_timeout: Duration, service: ProductGrpcService) -> Router {
    Server::builder()
        .timeout(request_timeout)
        .add_service(ProductServiceServer::new(service))
}
