use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::{ProductEntity, price_to_decimal};

/// Products table adapter.
///
/// Deletion is soft: rows keep their id and get a `deleted_at` stamp, and
/// every statement here ignores stamped rows. Ids come from a sequence and
/// are never handed out twice.
pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %error, "product query failed");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, description, price, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, stock, created_at, updated_at"#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(price_to_decimal(product.price)?)
        .bind(product.stock)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        entity.into_domain()
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, stock, created_at, updated_at FROM products WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, stock, created_at, updated_at FROM products WHERE deleted_at IS NULL ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                stock = $5,
                updated_at = $6
            WHERE id = $1 AND deleted_at IS NULL"#,
        )
        .bind(product.id.value())
        .bind(&product.name)
        .bind(&product.description)
        .bind(price_to_decimal(product.price)?)
        .bind(product.stock)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET deleted_at = $2 WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.value())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
