use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::value_objects::ProductId;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Fetching product by id: {}", params.id));

        let id: ProductId = params.id.parse()?;

        let product = self
            .repository
            .get_by_id(id)
            .await
            .map_err(|e| ProductError::from_lookup(id, e))?;

        self.logger.info(&format!("Product found: {}", product.id));
        Ok(product)
    }
}
