//! Product handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::AppResult;
use domain::{CreateProduct, Product, SearchProductsQuery};

use super::{non_empty, parse_number, require_id};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Product creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Desk Lamp")]
    #[serde(default)]
    pub name: String,
    #[schema(example = "LED lamp with adjustable arm")]
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    #[schema(example = 24.99)]
    pub price: f64,
    #[validate(range(min = 0, message = "quantity must be non-negative"))]
    #[schema(example = 10)]
    pub quantity: i32,
    #[schema(example = "Home")]
    #[serde(default)]
    pub category: String,
}

/// Optional search predicates plus paging
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchProductsParams {
    /// Case-insensitive match on name or description
    pub query: Option<String>,
    /// Case-insensitive exact category
    pub category: Option<String>,
    /// Inclusive lower price bound
    #[param(value_type = Option<f64>)]
    pub min_price: Option<String>,
    /// Inclusive upper price bound
    #[param(value_type = Option<f64>)]
    pub max_price: Option<String>,
    /// Page number, defaults to 1
    #[param(value_type = Option<i32>)]
    pub page: Option<String>,
    /// Items per page, defaults to 10
    #[param(value_type = Option<i32>)]
    pub page_size: Option<String>,
}

/// Single product envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
    pub message: String,
}

/// Paginated search result
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total_count: i32,
    pub page: i32,
    pub page_size: i32,
    pub message: String,
}

impl From<SearchProductsParams> for SearchProductsQuery {
    fn from(params: SearchProductsParams) -> Self {
        SearchProductsQuery {
            query: non_empty(params.query),
            category: non_empty(params.category),
            min_price: parse_number(params.min_price.as_deref()),
            max_price: parse_number(params.max_price.as_deref()),
            page: parse_number(params.page.as_deref()).unwrap_or_default(),
            page_size: parse_number(params.page_size.as_deref()).unwrap_or_default(),
        }
    }
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product))
        .route("/search", get(search_products))
        .route("/:id", get(get_product))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let product = state.products.create_product(CreateProduct {
        name: payload.name,
        description: payload.description,
        price: payload.price,
        quantity: payload.quantity,
        category: payload.category,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            success: true,
            product,
            message: "Product created successfully".to_string(),
        }),
    ))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductResponse>> {
    require_id(&id, "Product ID is required")?;

    let product = state.products.get_product(&id)?;
    Ok(Json(ProductResponse {
        success: true,
        product,
        message: "Product retrieved successfully".to_string(),
    }))
}

/// Search products
#[utoipa::path(
    get,
    path = "/api/v1/products/search",
    tag = "Products",
    params(SearchProductsParams),
    responses(
        (status = 200, description = "One page of matching products", body = ProductListResponse)
    )
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchProductsParams>,
) -> AppResult<Json<ProductListResponse>> {
    let page = state.products.search_products(params.into())?;

    Ok(Json(ProductListResponse {
        products: page.items,
        total_count: page.total,
        page: page.page,
        page_size: page.page_size,
        message: "Products retrieved successfully".to_string(),
    }))
}
