//! gRPC protocol definitions.
//!
//! This crate contains the wire messages and generated service stubs for:
//! - `user.v1.UserService`: user registry (CRUD, paginated listing)
//! - `product.v1.ProductService`: product catalog (create, get, search)

/// User service definitions.
pub mod user;

/// Product service definitions.
pub mod product;

// Re-export commonly used items
pub use product::product_service_client::ProductServiceClient;
pub use product::product_service_server::{ProductService, ProductServiceServer};
pub use user::user_service_client::UserServiceClient;
pub use user::user_service_server::{UserService, UserServiceServer};
