use chrono::{DateTime, Utc};

use super::errors::ProductError;
use super::validator;
use super::value_objects::ProductId;

/// The mutable fields of a product, as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductProps {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
}

/// A validated product that has not been stored yet and so has no id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
}

impl NewProduct {
    pub fn new(props: ProductProps) -> Result<Self, ProductError> {
        validator::validate(&props)?;

        Ok(Self {
            name: props.name,
            description: props.description,
            price: props.price,
            stock: props.stock,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: String,
        price: f64,
        stock: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock,
            created_at,
            updated_at,
        }
    }

    /// Replaces every mutable field. Callers validate `props` first.
    pub fn overwrite(&mut self, props: ProductProps) {
        self.name = props.name;
        self.description = props.description;
        self.price = props.price;
        self.stock = props.stock;
        self.updated_at = Utc::now();
    }
}
