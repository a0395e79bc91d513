//! gRPC transport.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use common::{AppError, AppResult, GrpcClientConfig};
use domain::{
    CreateProduct, CreateUser, ListUsersQuery, Page, Product, SearchProductsQuery, UpdateUser,
    User,
};
use proto::{ProductServiceClient, UserServiceClient};

use crate::RegistryClient;

/// gRPC client for both registry services over one channel.
pub struct GrpcClient {
    users: UserServiceClient<Channel>,
    products: ProductServiceClient<Channel>,
}

impl GrpcClient {
    /// Connect to the gRPC server.
    pub async fn connect(config: &GrpcClientConfig) -> AppResult<Self> {
        debug!("Connecting to gRPC server at {}", config.endpoint);

        let channel = Endpoint::from_shared(config.endpoint.clone())
            .map_err(|e| AppError::bad_request(format!("invalid gRPC address: {}", e)))?
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .connect()
            .await
            .map_err(|e| AppError::service_unavailable(format!("{} ({})", config.endpoint, e)))?;

        Ok(Self {
            users: UserServiceClient::new(channel.clone()),
            products: ProductServiceClient::new(channel),
        })
    }
}

#[async_trait]
impl RegistryClient for GrpcClient {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let request = proto::user::CreateUserRequest {
            username: input.username,
            email: input.email,
            full_name: input.full_name,
        };

        let mut client = self.users.clone();
        let response = client.create_user(request).await.map_err(AppError::from)?;
        required_user(response.into_inner().user)
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        let request = proto::user::GetUserRequest { id: id.to_string() };

        let mut client = self.users.clone();
        let response = client.get_user(request).await.map_err(AppError::from)?;
        required_user(response.into_inner().user)
    }

    async fn update_user(&self, id: &str, patch: UpdateUser) -> AppResult<User> {
        let request = proto::user::UpdateUserRequest {
            id: id.to_string(),
            username: patch.username,
            email: patch.email,
            full_name: patch.full_name,
            is_active: patch.is_active,
        };

        let mut client = self.users.clone();
        let response = client.update_user(request).await.map_err(AppError::from)?;
        required_user(response.into_inner().user)
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        let request = proto::user::DeleteUserRequest { id: id.to_string() };

        let mut client = self.users.clone();
        client.delete_user(request).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn list_users(&self, query: ListUsersQuery) -> AppResult<Page<User>> {
        let request = proto::user::ListUsersRequest {
            page: query.page,
            page_size: query.page_size,
            sort_by: query.sort_by,
            filter: query.filter,
        };

        let mut client = self.users.clone();
        let response = client.list_users(request).await.map_err(AppError::from)?;
        let proto = response.into_inner();

        Ok(Page {
            items: proto
                .users
                .into_iter()
                .map(proto_to_user)
                .collect::<AppResult<_>>()?,
            total: proto.total_count,
            page: proto.page,
            page_size: proto.page_size,
        })
    }

    async fn create_product(&self, input: CreateProduct) -> AppResult<Product> {
        let request = proto::product::CreateProductRequest {
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
            category: input.category,
        };

        let mut client = self.products.clone();
        let response = client
            .create_product(request)
            .await
            .map_err(AppError::from)?;
        required_product(response.into_inner().product)
    }

    async fn get_product(&self, id: &str) -> AppResult<Product> {
        let request = proto::product::GetProductRequest { id: id.to_string() };

        let mut client = self.products.clone();
        let response = client.get_product(request).await.map_err(AppError::from)?;
        required_product(response.into_inner().product)
    }

    async fn search_products(&self, query: SearchProductsQuery) -> AppResult<Page<Product>> {
        let request = proto::product::SearchProductsRequest {
            query: query.query,
            category: query.category,
            min_price: query.min_price,
            max_price: query.max_price,
            page: query.page,
            page_size: query.page_size,
        };

        let mut client = self.products.clone();
        let response = client
            .search_products(request)
            .await
            .map_err(AppError::from)?;
        let proto = response.into_inner();

        Ok(Page {
            items: proto
                .products
                .into_iter()
                .map(proto_to_product)
                .collect::<AppResult<_>>()?,
            total: proto.total_count,
            page: proto.page,
            page_size: proto.page_size,
        })
    }
}

fn required_user(user: Option<proto::user::User>) -> AppResult<User> {
    user.ok_or_else(|| AppError::grpc("response carried no user"))
        .and_then(proto_to_user)
}

fn required_product(product: Option<proto::product::Product>) -> AppResult<Product> {
    product
        .ok_or_else(|| AppError::grpc("response carried no product"))
        .and_then(proto_to_product)
}

fn parse_timestamp(value: &str, field: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::grpc(format!("invalid {} from server: {:?}", field, value)))
}

/// Convert proto User to domain User.
fn proto_to_user(proto: proto::user::User) -> AppResult<User> {
    Ok(User {
        created_at: parse_timestamp(&proto.created_at, "created_at")?,
        updated_at: parse_timestamp(&proto.updated_at, "updated_at")?,
        id: proto.id,
        username: proto.username,
        email: proto.email,
        full_name: proto.full_name,
        is_active: proto.is_active,
    })
}

/// Convert proto Product to domain Product.
fn proto_to_product(proto: proto::product::Product) -> AppResult<Product> {
    Ok(Product {
        created_at: parse_timestamp(&proto.created_at, "created_at")?,
        updated_at: parse_timestamp(&proto.updated_at, "updated_at")?,
        id: proto.id,
        name: proto.name,
        description: proto.description,
        price: proto.price,
        quantity: proto.quantity,
        category: proto.category,
    })
}
