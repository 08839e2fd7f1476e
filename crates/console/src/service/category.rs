use crate::service::api::ApiClient;
use async_trait::async_trait;
use shared::{
    abstract_trait::CategoryServiceTrait,
    domain::{
        requests::{
            CategoryFilters, CreateCategoryRequest, PaginationParams, UpdateCategoryRequest,
        },
        responses::{ApiResponse, ApiResponsePagination, CategoryResponse, EmptyData},
    },
    errors::ClientError,
};
use tracing::{error, info};

const ENDPOINT: &str = "/categorias";

#[derive(Debug, Clone)]
pub struct CategoryService {
    api: ApiClient,
}

impl CategoryService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn find_all(
        &self,
        pagination: &PaginationParams,
        filters: &CategoryFilters,
    ) -> Result<ApiResponsePagination<CategoryResponse>, ClientError> {
        info!(
            "Retrieving categories (page: {}, limit: {}, filters: {:?})",
            pagination.page, pagination.limit, filters
        );

        let response = self
            .api
            .get_paginated(ENDPOINT, pagination, Some(filters))
            .await
            .inspect_err(|e| error!("Failed to fetch categories: {e}"))?;

        info!(
            "Successfully fetched {} categories ({} pages)",
            response.data.len(),
            response.total_pages
        );
        Ok(response)
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ClientError> {
        info!("Retrieving category {id}");

        self.api
            .get(&format!("{ENDPOINT}/{id}"))
            .await
            .inspect_err(|e| error!("Failed to fetch category {id}: {e}"))
    }

    async fn find_active(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ClientError> {
        info!("Retrieving active categories");

        self.api
            .get(&format!("{ENDPOINT}/activas"))
            .await
            .inspect_err(|e| error!("Failed to fetch active categories: {e}"))
    }

    async fn create(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ClientError> {
        info!("Creating category '{}'", req.name);

        let response: ApiResponse<CategoryResponse> = self
            .api
            .post(ENDPOINT, req)
            .await
            .inspect_err(|e| error!("Failed to create category: {e}"))?;

        info!("Category created with id {}", response.data.id);
        Ok(response)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ClientError> {
        info!("Updating category {id}");

        self.api
            .put(&format!("{ENDPOINT}/{id}"), req)
            .await
            .inspect_err(|e| error!("Failed to update category {id}: {e}"))
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<EmptyData>, ClientError> {
        info!("Deleting category {id}");

        self.api
            .delete(&format!("{ENDPOINT}/{id}"))
            .await
            .inspect_err(|e| error!("Failed to delete category {id}: {e}"))
    }
}
