//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Both the gRPC and REST adapters translate to and from these types.

pub mod constants;
pub mod error;
pub mod product;
pub mod query;
pub mod timestamp;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use product::{CreateProduct, Product};
pub use query::{ListUsersQuery, Page, SearchProductsQuery};
pub use user::{CreateUser, UpdateUser, User};
