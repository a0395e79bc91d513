//! Registry Client Library
//!
//! One [`RegistryClient`] interface with a gRPC and a REST implementation.
//! Both return domain types so callers print the same output whichever
//! transport they picked.

pub mod config;
pub mod grpc_client;
pub mod rest_client;

use async_trait::async_trait;

use common::AppResult;
use domain::{
    CreateProduct, CreateUser, ListUsersQuery, Page, Product, SearchProductsQuery, UpdateUser,
    User,
};

use crate::config::{ClientConfig, Mode};
pub use crate::grpc_client::GrpcClient;
pub use crate::rest_client::RestClient;

/// Remote registry operations.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    async fn get_user(&self, id: &str) -> AppResult<User>;

    async fn update_user(&self, id: &str, patch: UpdateUser) -> AppResult<User>;

    async fn delete_user(&self, id: &str) -> AppResult<()>;

    async fn list_users(&self, query: ListUsersQuery) -> AppResult<Page<User>>;

    async fn create_product(&self, input: CreateProduct) -> AppResult<Product>;

    async fn get_product(&self, id: &str) -> AppResult<Product>;

    async fn search_products(&self, query: SearchProductsQuery) -> AppResult<Page<Product>>;
}

/// Build the client selected by `config.mode`.
pub async fn connect(config: &ClientConfig) -> AppResult<Box<dyn RegistryClient>> {
    match config.mode {
        Mode::Grpc => Ok(Box::new(GrpcClient::connect(&config.grpc).await?)),
        Mode::Rest => Ok(Box::new(RestClient::new(&config.rest)?)),
    }
}
