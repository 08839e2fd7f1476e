use crate::{
    domain::{
        requests::{
            ChangePasswordRequest, CreateUserRequest, PaginationParams, UpdateUserRequest,
            UserFilters,
        },
        responses::{ApiResponse, ApiResponsePagination, EmptyData, UserResponse},
    },
    errors::ClientError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    async fn find_all(
        &self,
        pagination: &PaginationParams,
        filters: &UserFilters,
    ) -> Result<ApiResponsePagination<UserResponse>, ClientError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<UserResponse>, ClientError>;
    async fn find_active(&self) -> Result<ApiResponse<Vec<UserResponse>>, ClientError>;
    async fn create(&self, req: &CreateUserRequest)
    -> Result<ApiResponse<UserResponse>, ClientError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ClientError>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<EmptyData>, ClientError>;
    async fn change_password(
        &self,
        id: i32,
        req: &ChangePasswordRequest,
    ) -> Result<ApiResponse<EmptyData>, ClientError>;
    async fn toggle_status(
        &self,
        id: i32,
        active: bool,
    ) -> Result<ApiResponse<UserResponse>, ClientError>;
}
