use crate::{
    domain::{
        requests::{
            CategoryFilters, CreateCategoryRequest, PaginationParams, UpdateCategoryRequest,
        },
        responses::{ApiResponse, ApiResponsePagination, CategoryResponse, EmptyData},
    },
    errors::ClientError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryServiceTrait {
    async fn find_all(
        &self,
        pagination: &PaginationParams,
        filters: &CategoryFilters,
    ) -> Result<ApiResponsePagination<CategoryResponse>, ClientError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ClientError>;
    async fn find_active(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ClientError>;
    async fn create(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ClientError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ClientError>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<EmptyData>, ClientError>;
}
