use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct DeleteProductParams {
    /// Raw identifier as received on the wire.
    pub id: String,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Removes the product and returns its last known content.
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError>;
}
