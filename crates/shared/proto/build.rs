//! Generates the gRPC client and server stubs.
//!
//! Message types are written by hand with `prost` derives (see `src/user.rs`
//! and `src/product.rs`), so the services are described with the manual
//! builder and no `protoc` installation is needed.

use tonic_build::manual::{Builder, Method, Service};

const PROST_CODEC: &str = "tonic::codec::ProstCodec";

fn unary(name: &str, route: &str, module: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(format!("crate::{}::{}", module, input))
        .output_type(format!("crate::{}::{}", module, output))
        .codec_path(PROST_CODEC)
        .build()
}

fn main() {
    let user_service = Service::builder()
        .name("UserService")
        .package("user.v1")
        .method(unary("create_user", "CreateUser", "user", "CreateUserRequest", "CreateUserResponse"))
        .method(unary("get_user", "GetUser", "user", "GetUserRequest", "GetUserResponse"))
        .method(unary("update_user", "UpdateUser", "user", "UpdateUserRequest", "UpdateUserResponse"))
        .method(unary("delete_user", "DeleteUser", "user", "DeleteUserRequest", "DeleteUserResponse"))
        .method(unary("list_users", "ListUsers", "user", "ListUsersRequest", "ListUsersResponse"))
        .build();

    let product_service = Service::builder()
        .name("ProductService")
        .package("product.v1")
        .method(unary(
            "create_product",
            "CreateProduct",
            "product",
            "CreateProductRequest",
            "CreateProductResponse",
        ))
        .method(unary(
            "get_product",
            "GetProduct",
            "product",
            "GetProductRequest",
            "GetProductResponse",
        ))
        .method(unary(
            "search_products",
            "SearchProducts",
            "product",
            "SearchProductsRequest",
            "SearchProductsResponse",
        ))
        .build();

    Builder::new().compile(&[user_service, product_service]);

    println!("cargo:rerun-if-changed=build.rs");
}
