//! Registry business logic.

mod product_service;
mod user_service;

pub use product_service::{ProductManager, ProductService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use product_service::MockProductService;
#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
