use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use grpc_api::product::service::ProductGrpcService;
use logger::TracingLogger;

pub struct DependencyContainer {
    pub product_service: ProductGrpcService,
}

impl DependencyContainer {
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        let logger = Arc::new(TracingLogger);

        let product_service = ProductGrpcService::from_repository(product_repository, logger);

        Self { product_service }
    }
}
