use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = self.price.to_f64().ok_or(RepositoryError::Persistence)?;

        Ok(Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.description,
            price,
            self.stock,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Converts a domain price into the `NUMERIC` column value.
///
/// Goes through the shortest decimal rendering so `9.99` is stored as `9.99`
/// rather than its binary expansion.
pub fn price_to_decimal(price: f64) -> Result<BigDecimal, RepositoryError> {
    if !price.is_finite() {
        return Err(RepositoryError::Persistence);
    }
    price
        .to_string()
        .parse::<BigDecimal>()
        .map_err(|_| RepositoryError::Persistence)
}
