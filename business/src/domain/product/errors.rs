use crate::domain::errors::{ErrorKind, RepositoryError};

use super::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_not_positive")]
    PriceNotPositive,
    #[error("product.stock_negative")]
    StockNegative,
    #[error("product.invalid_id: {0}")]
    InvalidId(String),
    #[error("product.not_found: {0}")]
    NotFound(ProductId),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::NameEmpty
            | ProductError::PriceNotPositive
            | ProductError::StockNegative
            | ProductError::InvalidId(_) => ErrorKind::InvalidArgument,
            ProductError::NotFound(_) => ErrorKind::NotFound,
            ProductError::Repository(_) => ErrorKind::Internal,
        }
    }

    /// Maps a repository failure that happened while looking up `id`.
    pub fn from_lookup(id: ProductId, error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound(id),
            other => ProductError::Repository(other),
        }
    }
}
