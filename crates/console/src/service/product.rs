use crate::service::api::ApiClient;
use async_trait::async_trait;
use shared::{
    abstract_trait::ProductServiceTrait,
    domain::{
        requests::{CreateProductRequest, PaginationParams, ProductFilters, UpdateProductRequest},
        responses::{ApiResponse, ApiResponsePagination, EmptyData, ProductResponse},
    },
    errors::ClientError,
};
use tracing::{error, info};

const ENDPOINT: &str = "/productos";

#[derive(Debug, Clone)]
pub struct ProductService {
    api: ApiClient,
}

impl ProductService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(
        &self,
        pagination: &PaginationParams,
        filters: &ProductFilters,
    ) -> Result<ApiResponsePagination<ProductResponse>, ClientError> {
        info!(
            "Retrieving products (page: {}, limit: {}, filters: {:?})",
            pagination.page, pagination.limit, filters
        );

        let response = self
            .api
            .get_paginated(ENDPOINT, pagination, Some(filters))
            .await
            .inspect_err(|e| error!("Failed to fetch products: {e}"))?;

        info!("Successfully fetched {} products", response.data.len());
        Ok(response)
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ClientError> {
        info!("Retrieving product {id}");

        self.api
            .get(&format!("{ENDPOINT}/{id}"))
            .await
            .inspect_err(|e| error!("Failed to fetch product {id}: {e}"))
    }

    async fn find_active(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ClientError> {
        info!("Retrieving active products");

        self.api
            .get(&format!("{ENDPOINT}/activos"))
            .await
            .inspect_err(|e| error!("Failed to fetch active products: {e}"))
    }

    async fn find_by_category(
        &self,
        category_id: i32,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ClientError> {
        info!("Retrieving products of category {category_id}");

        let response: ApiResponse<Vec<ProductResponse>> = self
            .api
            .get(&format!("{ENDPOINT}/categoria/{category_id}"))
            .await
            .inspect_err(|e| error!("Failed to fetch products of category {category_id}: {e}"))?;

        info!(
            "Category {category_id} has {} products",
            response.data.len()
        );
        Ok(response)
    }

    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ClientError> {
        info!("Creating product '{}'", req.name);

        self.api
            .post(ENDPOINT, req)
            .await
            .inspect_err(|e| error!("Failed to create product: {e}"))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ClientError> {
        info!("Updating product {id}");

        self.api
            .put(&format!("{ENDPOINT}/{id}"), req)
            .await
            .inspect_err(|e| error!("Failed to update product {id}: {e}"))
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<EmptyData>, ClientError> {
        info!("Deleting product {id}");

        self.api
            .delete(&format!("{ENDPOINT}/{id}"))
            .await
            .inspect_err(|e| error!("Failed to delete product {id}: {e}"))
    }
}
