use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

/// Process-local product store for tests and `STORAGE_BACKEND=memory`.
///
/// Deletion is hard; ids keep increasing so a deleted id is never reissued.
#[derive(Default)]
pub struct ProductRepositoryInMemory {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    last_id: i64,
    products: BTreeMap<ProductId, Product>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        let now = Utc::now();
        let stored = Product::from_repository(
            ProductId::new(state.last_id),
            product.name.clone(),
            product.description.clone(),
            product.price,
            product.stock,
            now,
            now,
        );
        state.products.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.state
            .read()
            .await
            .products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.state.read().await.products.values().cloned().collect())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        match state.products.get_mut(&product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.state
            .write()
            .await
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: String::new(),
            price: 9.99,
            stock: 10,
        }
    }

    #[tokio::test]
    async fn should_assign_increasing_ids() {
        let repo = ProductRepositoryInMemory::new();

        let first = repo.create(&new_product("Widget")).await.unwrap();
        let second = repo.create(&new_product("Gadget")).await.unwrap();

        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(second.id, ProductId::new(2));
    }

    #[tokio::test]
    async fn should_return_empty_list_for_empty_store() {
        let repo = ProductRepositoryInMemory::new();
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_not_reuse_id_after_delete() {
        let repo = ProductRepositoryInMemory::new();
        let first = repo.create(&new_product("Widget")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(&new_product("Widget")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(
            repo.get_by_id(first.id).await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn should_report_not_found_for_missing_rows() {
        let repo = ProductRepositoryInMemory::new();
        let ghost = Product::from_repository(
            ProductId::new(99),
            "Ghost".to_string(),
            String::new(),
            1.0,
            0,
            Utc::now(),
            Utc::now(),
        );

        assert_eq!(repo.update(&ghost).await, Err(RepositoryError::NotFound));
        assert_eq!(
            repo.delete(ProductId::new(99)).await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn should_replace_stored_record_on_update() {
        let repo = ProductRepositoryInMemory::new();
        let mut product = repo.create(&new_product("Widget")).await.unwrap();
        product.stock = 0;

        repo.update(&product).await.unwrap();

        assert_eq!(repo.get_by_id(product.id).await.unwrap().stock, 0);
    }
}
