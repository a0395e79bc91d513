//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::HealthResponse;
use crate::handlers::product_handler::{
    CreateProductRequest, ProductListResponse, ProductResponse,
};
use crate::handlers::user_handler::{
    CreateUserRequest, UpdateUserRequest, UserListResponse, UserResponse,
};
use domain::{Product, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registry API",
        description = "User and product registry over REST"
    ),
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
        crate::handlers::product_handler::create_product,
        crate::handlers::product_handler::get_product,
        crate::handlers::product_handler::search_products,
    ),
    components(
        schemas(
            HealthResponse,
            User,
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            UserListResponse,
            Product,
            CreateProductRequest,
            ProductResponse,
            ProductListResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Users", description = "User registry endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/health",
            "/api/v1/users",
            "/api/v1/users/{id}",
            "/api/v1/products",
            "/api/v1/products/{id}",
            "/api/v1/products/search",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
