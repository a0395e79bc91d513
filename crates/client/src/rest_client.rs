//! REST transport.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use common::{AppError, AppResult, HttpClientConfig};
use domain::{
    CreateProduct, CreateUser, ListUsersQuery, Page, Product, SearchProductsQuery, UpdateUser,
    User,
};

use crate::RegistryClient;

const API_PREFIX: &str = "/api/v1";

/// HTTP client for the `/api/v1` REST interface.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct CreateUserBody<'a> {
    username: &'a str,
    email: &'a str,
    full_name: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateUserBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_active: Option<bool>,
}

#[derive(Debug, Serialize)]
struct CreateProductBody<'a> {
    name: &'a str,
    description: &'a str,
    price: f64,
    quantity: i32,
    category: &'a str,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: Option<User>,
}

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    product: Product,
}

#[derive(Debug, Deserialize)]
struct UserList {
    users: Vec<User>,
    total_count: i32,
    page: i32,
    page_size: i32,
}

#[derive(Debug, Deserialize)]
struct ProductList {
    products: Vec<Product>,
    total_count: i32,
    page: i32,
    page_size: i32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl RestClient {
    pub fn new(config: &HttpClientConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;
        debug!(%status, len = bytes.len(), "REST response");

        if status.is_success() {
            serde_json::from_slice(&bytes)
                .map_err(|e| AppError::internal(format!("unexpected response body: {}", e)))
        } else {
            Err(error_from_response(status, &bytes))
        }
    }
}

#[async_trait]
impl RegistryClient for RestClient {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let body = CreateUserBody {
            username: &input.username,
            email: &input.email,
            full_name: &input.full_name,
        };
        let envelope: UserEnvelope = self
            .send(self.client.post(self.url("/users")).json(&body))
            .await?;
        required_user(envelope)
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        let envelope: UserEnvelope = self
            .send(self.client.get(self.url(&format!("/users/{}", id))))
            .await?;
        required_user(envelope)
    }

    async fn update_user(&self, id: &str, patch: UpdateUser) -> AppResult<User> {
        let body = UpdateUserBody {
            username: patch.username.as_deref(),
            email: patch.email.as_deref(),
            full_name: patch.full_name.as_deref(),
            is_active: patch.is_active,
        };
        let envelope: UserEnvelope = self
            .send(
                self.client
                    .put(self.url(&format!("/users/{}", id)))
                    .json(&body),
            )
            .await?;
        required_user(envelope)
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        let _: serde_json::Value = self
            .send(self.client.delete(self.url(&format!("/users/{}", id))))
            .await?;
        Ok(())
    }

    async fn list_users(&self, query: ListUsersQuery) -> AppResult<Page<User>> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("page_size", query.page_size.to_string()),
        ];
        if let Some(sort_by) = query.sort_by {
            params.push(("sort_by", sort_by));
        }
        if let Some(filter) = query.filter {
            params.push(("filter", filter));
        }

        let list: UserList = self
            .send(self.client.get(self.url("/users")).query(&params))
            .await?;
        Ok(Page {
            items: list.users,
            total: list.total_count,
            page: list.page,
            page_size: list.page_size,
        })
    }

    async fn create_product(&self, input: CreateProduct) -> AppResult<Product> {
        let body = CreateProductBody {
            name: &input.name,
            description: &input.description,
            price: input.price,
            quantity: input.quantity,
            category: &input.category,
        };
        let envelope: ProductEnvelope = self
            .send(self.client.post(self.url("/products")).json(&body))
            .await?;
        Ok(envelope.product)
    }

    async fn get_product(&self, id: &str) -> AppResult<Product> {
        let envelope: ProductEnvelope = self
            .send(self.client.get(self.url(&format!("/products/{}", id))))
            .await?;
        Ok(envelope.product)
    }

    async fn search_products(&self, query: SearchProductsQuery) -> AppResult<Page<Product>> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("page_size", query.page_size.to_string()),
        ];
        if let Some(text) = query.query {
            params.push(("query", text));
        }
        if let Some(category) = query.category {
            params.push(("category", category));
        }
        if let Some(min) = query.min_price {
            params.push(("min_price", min.to_string()));
        }
        if let Some(max) = query.max_price {
            params.push(("max_price", max.to_string()));
        }

        let list: ProductList = self
            .send(self.client.get(self.url("/products/search")).query(&params))
            .await?;
        Ok(Page {
            items: list.products,
            total: list.total_count,
            page: list.page,
            page_size: list.page_size,
        })
    }
}

fn required_user(envelope: UserEnvelope) -> AppResult<User> {
    envelope
        .user
        .ok_or_else(|| AppError::internal("response carried no user"))
}

fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_connect() || err.is_timeout() {
        AppError::service_unavailable(err.to_string())
    } else {
        AppError::internal(err.to_string())
    }
}

/// Rebuild the server's error from its JSON body, falling back to the
/// HTTP status when the body is not an error envelope.
fn error_from_response(status: StatusCode, body: &[u8]) -> AppError {
    let Ok(ErrorEnvelope { error }) = serde_json::from_slice::<ErrorEnvelope>(body) else {
        return AppError::internal(format!("server returned {}", status));
    };

    match error.code.as_str() {
        "NOT_FOUND" => AppError::NotFound(error.message),
        "ALREADY_EXISTS" => AppError::Conflict(error.message),
        "VALIDATION_FAILED" | "INVALID_REQUEST" => AppError::Validation(error.message),
        "SERVICE_UNAVAILABLE" => AppError::ServiceUnavailable(error.message),
        _ => AppError::Internal(error.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_response_uses_code() {
        let body = br#"{"success":false,"error":{"code":"ALREADY_EXISTS","message":"user already exists (username: alice)"}}"#;
        let err = error_from_response(StatusCode::CONFLICT, body);
        assert_eq!(
            err,
            AppError::Conflict("user already exists (username: alice)".to_string())
        );
    }

    #[test]
    fn test_error_from_unexpected_body() {
        let err = error_from_response(StatusCode::BAD_GATEWAY, b"<html>");
        assert!(matches!(err, AppError::Internal(msg) if msg.contains("502")));
    }

    #[test]
    fn test_url_joins_prefix() {
        let client = RestClient::new(&HttpClientConfig {
            base_url: "http://localhost:8080/".to_string(),
            request_timeout_ms: 1000,
        })
        .unwrap();
        assert_eq!(client.url("/users/1"), "http://localhost:8080/api/v1/users/1");
    }
}
