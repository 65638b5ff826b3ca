use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};
use super::value_objects::ProductId;

/// Storage contract for products.
///
/// `RepositoryError::NotFound` must be returned whenever the targeted id has
/// no live record, so callers can tell it apart from store failures.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a new product; the store assigns the id.
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Returns every live product; an empty store yields an empty vector.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
