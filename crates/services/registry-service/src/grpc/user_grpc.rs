//! gRPC implementation for `user.v1.UserService`.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use domain::{CreateUser, ListUsersQuery, UpdateUser};
use proto::user::{
    user_service_server::UserService as UserServiceProto, CreateUserRequest, CreateUserResponse,
    DeleteUserRequest, DeleteUserResponse, GetUserRequest, GetUserResponse, ListUsersRequest,
    ListUsersResponse, UpdateUserRequest, UpdateUserResponse,
};

use super::{require_id, to_status};
use crate::service::UserService;

/// gRPC service wrapper for UserService.
pub struct UserGrpcService {
    service: Arc<dyn UserService>,
}

impl UserGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl UserServiceProto for UserGrpcService {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .service
            .create_user(CreateUser::new(req.username, req.email, req.full_name))
            .map_err(to_status)?;

        Ok(Response::new(CreateUserResponse {
            user: Some(user_to_proto(&user)),
            message: "User created successfully".to_string(),
        }))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        let req = request.into_inner();
        require_id(&req.id)?;

        let user = self.service.get_user(&req.id).map_err(to_status)?;

        Ok(Response::new(GetUserResponse {
            user: Some(user_to_proto(&user)),
            message: "User retrieved successfully".to_string(),
        }))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UpdateUserResponse>, Status> {
        let req = request.into_inner();
        require_id(&req.id)?;

        let patch = UpdateUser {
            username: req.username,
            email: req.email,
            full_name: req.full_name,
            is_active: req.is_active,
        };
        let user = self.service.update_user(&req.id, patch).map_err(to_status)?;

        Ok(Response::new(UpdateUserResponse {
            user: Some(user_to_proto(&user)),
            message: "User updated successfully".to_string(),
        }))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        let req = request.into_inner();
        require_id(&req.id)?;

        self.service.delete_user(&req.id).map_err(to_status)?;

        Ok(Response::new(DeleteUserResponse {
            message: "User deleted successfully".to_string(),
        }))
    }

    async fn list_users(
        &self,
        request: Request<ListUsersRequest>,
    ) -> Result<Response<ListUsersResponse>, Status> {
        let req = request.into_inner();

        let page = self
            .service
            .list_users(ListUsersQuery {
                page: req.page,
                page_size: req.page_size,
                sort_by: req.sort_by,
                filter: req.filter,
            })
            .map_err(to_status)?;

        Ok(Response::new(ListUsersResponse {
            users: page.items.iter().map(user_to_proto).collect(),
            total_count: page.total,
            page: page.page,
            page_size: page.page_size,
        }))
    }
}

/// Convert domain User to its wire form.
fn user_to_proto(user: &domain::User) -> proto::user::User {
    proto::user::User {
        id: user.id.clone(),
        username: user.username.clone(),
        email: user.email.clone(),
        full_name: user.full_name.clone(),
        is_active: user.is_active,
        created_at: user.created_at.to_rfc3339(),
        updated_at: user.updated_at.to_rfc3339(),
    }
}
