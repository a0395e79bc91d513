//! User handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::AppResult;
use domain::{CreateUser, ListUsersQuery, UpdateUser, User};

use super::{non_empty, parse_number, require_id};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// User creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "jdoe")]
    #[serde(default)]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jdoe@example.com")]
    #[serde(default)]
    pub email: String,
    #[schema(example = "Jane Doe")]
    #[serde(default)]
    pub full_name: String,
}

/// User update request; omitted fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    /// Stored as given; only creation checks the format
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: Option<bool>,
}

/// Paging, sorting and filtering for the user list
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Page number, defaults to 1
    #[param(value_type = Option<i32>)]
    pub page: Option<String>,
    /// Items per page, defaults to 10
    #[param(value_type = Option<i32>)]
    pub page_size: Option<String>,
    /// `username`, `email`, `full_name` or `created_at`
    pub sort_by: Option<String>,
    /// Case-insensitive match on username, email or full name
    pub filter: Option<String>,
}

/// Single user envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub message: String,
}

/// Paginated user list
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total_count: i32,
    pub page: i32,
    pub page_size: i32,
    pub message: String,
}

impl UserResponse {
    fn ok(user: Option<User>, message: &str) -> Json<Self> {
        Json(Self {
            success: true,
            user,
            message: message.to_string(),
        })
    }
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(req: UpdateUserRequest) -> Self {
        UpdateUser {
            username: req.username,
            email: req.email,
            full_name: req.full_name,
            is_active: req.is_active,
        }
    }
}

impl From<ListUsersParams> for ListUsersQuery {
    fn from(params: ListUsersParams) -> Self {
        ListUsersQuery {
            page: parse_number(params.page.as_deref()).unwrap_or_default(),
            page_size: parse_number(params.page_size.as_deref()).unwrap_or_default(),
            sort_by: non_empty(params.sort_by),
            filter: non_empty(params.filter),
        }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.users.create_user(CreateUser::new(
        payload.username,
        payload.email,
        payload.full_name,
    ))?;

    Ok((
        StatusCode::CREATED,
        UserResponse::ok(Some(user), "User created successfully"),
    ))
}

/// List users with paging, sorting and filtering
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "One page of users", body = UserListResponse)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> AppResult<Json<UserListResponse>> {
    let page = state.users.list_users(params.into())?;

    Ok(Json(UserListResponse {
        users: page.items,
        total_count: page.total,
        page: page.page,
        page_size: page.page_size,
        message: "Users retrieved successfully".to_string(),
    }))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    require_id(&id, "User ID is required")?;

    let user = state.users.get_user(&id)?;
    Ok(UserResponse::ok(Some(user), "User retrieved successfully"))
}

/// Update user
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    require_id(&id, "User ID is required")?;

    let user = state.users.update_user(&id, payload.into())?;
    Ok(UserResponse::ok(Some(user), "User updated successfully"))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    require_id(&id, "User ID is required")?;

    state.users.delete_user(&id)?;
    Ok(UserResponse::ok(None, "User deleted successfully"))
}
