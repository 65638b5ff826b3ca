use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Deleting product: {}", params.id));

        let id: ProductId = params.id.parse()?;

        // Keep the last known content so it can be echoed back
        let product = self
            .repository
            .get_by_id(id)
            .await
            .map_err(|e| ProductError::from_lookup(id, e))?;

        self.repository
            .delete(id)
            .await
            .map_err(|e| ProductError::from_lookup(id, e))?;

        self.logger.info(&format!("Product deleted: {}", id));
        Ok(product)
    }
}
