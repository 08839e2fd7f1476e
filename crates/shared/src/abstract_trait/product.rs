use crate::{
    domain::{
        requests::{CreateProductRequest, PaginationParams, ProductFilters, UpdateProductRequest},
        responses::{ApiResponse, ApiResponsePagination, EmptyData, ProductResponse},
    },
    errors::ClientError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn find_all(
        &self,
        pagination: &PaginationParams,
        filters: &ProductFilters,
    ) -> Result<ApiResponsePagination<ProductResponse>, ClientError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ClientError>;
    async fn find_active(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ClientError>;
    async fn find_by_category(
        &self,
        category_id: i32,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ClientError>;
    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ClientError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ClientError>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<EmptyData>, ClientError>;
}
