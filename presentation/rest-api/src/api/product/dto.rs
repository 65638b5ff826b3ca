use poem_openapi::Object;

use grpc_api::proto;

/// Body of `POST /products`
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free text, defaults to empty
    #[oai(default)]
    pub description: String,
    /// Unit price, strictly positive
    pub price: f64,
    /// Units in stock, not negative
    pub stock: i32,
}

/// Body of `PUT /products/:id`; every field is overwritten
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free text, defaults to empty
    #[oai(default)]
    pub description: String,
    /// Unit price, strictly positive
    pub price: f64,
    /// Units in stock, not negative
    pub stock: i32,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Store-assigned identifier
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

impl From<CreateProductRequest> for proto::CreateProductRequest {
    fn from(body: CreateProductRequest) -> Self {
        Self {
            product: Some(proto::Product {
                id: String::new(),
                name: body.name,
                description: body.description,
                price: body.price,
                stock: body.stock,
            }),
        }
    }
}

impl UpdateProductRequest {
    pub fn into_proto(self, id: String) -> proto::UpdateProductRequest {
        proto::UpdateProductRequest {
            product: Some(proto::Product {
                id,
                name: self.name,
                description: self.description,
                price: self.price,
                stock: self.stock,
            }),
        }
    }
}

impl From<proto::Product> for ProductResponse {
    fn from(product: proto::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
        }
    }
}

impl From<proto::GetAllProductResponse> for ProductListResponse {
    fn from(response: proto::GetAllProductResponse) -> Self {
        Self {
            products: response.products.into_iter().map(Into::into).collect(),
        }
    }
}
