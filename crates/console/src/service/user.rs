use crate::service::api::ApiClient;
use async_trait::async_trait;
use serde_json::json;
use shared::{
    abstract_trait::UserServiceTrait,
    domain::{
        requests::{
            ChangePasswordRequest, CreateUserRequest, PaginationParams, UpdateUserRequest,
            UserFilters,
        },
        responses::{ApiResponse, ApiResponsePagination, EmptyData, UserResponse},
    },
    errors::ClientError,
};
use tracing::{error, info};

const ENDPOINT: &str = "/usuarios";

#[derive(Debug, Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn find_all(
        &self,
        pagination: &PaginationParams,
        filters: &UserFilters,
    ) -> Result<ApiResponsePagination<UserResponse>, ClientError> {
        info!(
            "Retrieving users (page: {}, limit: {}, filters: {:?})",
            pagination.page, pagination.limit, filters
        );

        let response = self
            .api
            .get_paginated(ENDPOINT, pagination, Some(filters))
            .await
            .inspect_err(|e| error!("Failed to fetch users: {e}"))?;

        info!("Successfully fetched {} users", response.data.len());
        Ok(response)
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<UserResponse>, ClientError> {
        self.api
            .get(&format!("{ENDPOINT}/{id}"))
            .await
            .inspect_err(|e| error!("Failed to fetch user {id}: {e}"))
    }

    async fn find_active(&self) -> Result<ApiResponse<Vec<UserResponse>>, ClientError> {
        self.api
            .get(&format!("{ENDPOINT}/activos"))
            .await
            .inspect_err(|e| error!("Failed to fetch active users: {e}"))
    }

    async fn create(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ClientError> {
        info!("Creating user {}", req.email);

        let response: ApiResponse<UserResponse> = self
            .api
            .post(ENDPOINT, req)
            .await
            .inspect_err(|e| error!("Failed to create user {}: {e}", req.email))?;

        info!("User {} registered with id {}", req.email, response.data.id);
        Ok(response)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ClientError> {
        info!("Updating user {id}");

        self.api
            .put(&format!("{ENDPOINT}/{id}"), req)
            .await
            .inspect_err(|e| error!("Failed to update user {id}: {e}"))
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<EmptyData>, ClientError> {
        info!("Deleting user {id}");

        self.api
            .delete(&format!("{ENDPOINT}/{id}"))
            .await
            .inspect_err(|e| error!("Failed to delete user {id}: {e}"))
    }

    async fn change_password(
        &self,
        id: i32,
        req: &ChangePasswordRequest,
    ) -> Result<ApiResponse<EmptyData>, ClientError> {
        info!("Changing password of user {id}");

        self.api
            .post(&format!("{ENDPOINT}/{id}/change-password"), req)
            .await
            .inspect_err(|e| error!("Failed to change password of user {id}: {e}"))
    }

    async fn toggle_status(
        &self,
        id: i32,
        active: bool,
    ) -> Result<ApiResponse<UserResponse>, ClientError> {
        info!("Setting user {id} active={active}");

        self.api
            .patch(
                &format!("{ENDPOINT}/{id}/toggle-status"),
                &json!({ "activo": active }),
            )
            .await
            .inspect_err(|e| error!("Failed to toggle status of user {id}: {e}"))
    }
}
