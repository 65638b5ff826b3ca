use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::validator;
use crate::domain::product::value_objects::ProductId;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Updating product: {}", params.id));

        let id: ProductId = params.id.parse()?;
        validator::validate(&params.props)?;

        // Fetch and save are two round-trips; the store alone arbitrates races.
        let mut product = self
            .repository
            .get_by_id(id)
            .await
            .map_err(|e| ProductError::from_lookup(id, e))?;

        product.overwrite(params.props);

        self.repository
            .update(&product)
            .await
            .map_err(|e| ProductError::from_lookup(id, e))?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{ErrorKind, RepositoryError};
    use crate::domain::product::model::{NewProduct, ProductProps};
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn make_product(id: ProductId) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            "Widget".to_string(),
            "Original".to_string(),
            9.99,
            10,
            now,
            now,
        )
    }

    fn params(id: &str, name: &str, price: f64, stock: i32) -> UpdateProductParams {
        UpdateProductParams {
            id: id.to_string(),
            props: ProductProps {
                name: name.to_string(),
                description: String::new(),
                price,
                stock,
            },
        }
    }

    #[tokio::test]
    async fn should_overwrite_every_mutable_field() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(ProductId::new(1)))
            .returning(|id| Ok(make_product(id)));
        mock_repo
            .expect_update()
            .withf(|p| {
                p.id == ProductId::new(1)
                    && p.name == "Widget2"
                    && p.description.is_empty()
                    && p.price == 12.0
                    && p.stock == 5
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params("1", "Widget2", 12.0, 5))
            .await
            .unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Widget2");
        assert_eq!(product.description, "");
        assert_eq!(product.price, 12.0);
        assert_eq!(product.stock, 5);
    }

    #[tokio::test]
    async fn should_reject_invalid_price_before_touching_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("1", "Widget2", -1.0, 5)).await;

        assert!(matches!(result, Err(ProductError::PriceNotPositive)));
    }

    #[tokio::test]
    async fn should_reject_empty_name_before_touching_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("1", "  ", 12.0, 5)).await;

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[tokio::test]
    async fn should_reject_negative_stock_before_touching_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("1", "Widget2", 12.0, -1)).await;

        assert!(matches!(result, Err(ProductError::StockNegative)));
    }

    #[tokio::test]
    async fn should_reject_malformed_id_before_validation() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("abc", "", -1.0, -1)).await;

        assert!(matches!(result, Err(ProductError::InvalidId(raw)) if raw == "abc"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("42", "Widget", 1.0, 1)).await;

        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == ProductId::new(42)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_vanishes_before_save() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id)));
        mock_repo
            .expect_update()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(params("1", "Widget", 1.0, 1))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn should_map_save_failure_to_internal() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id)));
        mock_repo
            .expect_update()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(params("1", "Widget", 1.0, 1))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Internal);
    }
}
