//! Wire messages of `catalog.v1.ProductService`.
//!
//! Product ids are always decimal strings on the wire.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Product {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub description: ::prost::alloc::string::String,
    #[prost(double, tag = "4")]
    pub price: f64,
    #[prost(int32, tag = "5")]
    pub stock: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProductRequest {
    #[prost(message, optional, tag = "1")]
    pub product: ::core::option::Option<Product>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetAllProductRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAllProductResponse {
    #[prost(message, repeated, tag = "1")]
    pub products: ::prost::alloc::vec::Vec<Product>,
}

/// The target id travels inside `product.id`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateProductRequest {
    #[prost(message, optional, tag = "1")]
    pub product: ::core::option::Option<Product>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteProductRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

include!(concat!(env!("OUT_DIR"), "/catalog.v1.ProductService.rs"));
