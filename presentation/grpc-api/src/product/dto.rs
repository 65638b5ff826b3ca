use business::domain::product::model::{Product, ProductProps};

use crate::proto;

impl From<Product> for proto::Product {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
        }
    }
}

/// Takes the four mutable fields of a wire product; `id` is left to the caller.
pub fn into_props(product: proto::Product) -> ProductProps {
    ProductProps {
        name: product.name,
        description: product.description,
        price: product.price,
        stock: product.stock,
    }
}
