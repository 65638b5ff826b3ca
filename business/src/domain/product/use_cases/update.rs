use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductProps};

pub struct UpdateProductParams {
    /// Raw identifier as received on the wire.
    pub id: String,
    pub props: ProductProps,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
