use tonic_build::manual::{Builder, Method, Service};

fn unary(name: &str, route_name: &str, input_type: &str, output_type: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route_name)
        .input_type(input_type)
        .output_type(output_type)
        .codec_path("tonic_prost::ProstCodec")
        .build()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let product_service = Service::builder()
        .name("ProductService")
        .package("catalog.v1")
        .method(unary(
            "create_product",
            "CreateProduct",
            "crate::proto::CreateProductRequest",
            "crate::proto::Product",
        ))
        .method(unary(
            "get_product",
            "GetProduct",
            "crate::proto::GetProductRequest",
            "crate::proto::Product",
        ))
        .method(unary(
            "get_all_product",
            "GetAllProduct",
            "crate::proto::GetAllProductRequest",
            "crate::proto::GetAllProductResponse",
        ))
        .method(unary(
            "update_product",
            "UpdateProduct",
            "crate::proto::UpdateProductRequest",
            "crate::proto::Product",
        ))
        .method(unary(
            "delete_product",
            "DeleteProduct",
            "crate::proto::DeleteProductRequest",
            "crate::proto::Product",
        ))
        .build();

    Builder::new().compile(&[product_service]);
}
