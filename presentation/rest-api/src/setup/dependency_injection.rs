use grpc_api::proto::product_service_client::ProductServiceClient;
use tonic::transport::Channel;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(catalog_client: ProductServiceClient<Channel>) -> Self {
        Self {
            health_api: HealthApi::new(),
            product_api: ProductApi::new(catalog_client),
        }
    }
}
