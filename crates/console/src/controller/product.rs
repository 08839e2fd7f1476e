use crate::controller::{
    form::{FormController, FormSource, not_blank},
    list::{ListController, ListSource},
};
use async_trait::async_trait;
use shared::{
    abstract_trait::DynProductService,
    domain::{
        requests::{CreateProductRequest, PaginationParams, ProductFilters, UpdateProductRequest},
        responses::{ApiResponsePagination, ProductResponse},
    },
    errors::{ClientError, ServiceError},
};
use validator::Validate;

pub type ProductListController = ListController<ProductSource>;
pub type ProductFormController = FormController<ProductSource>;

#[derive(Clone)]
pub struct ProductSource {
    service: DynProductService,
}

impl std::fmt::Debug for ProductSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductSource")
            .field("service", &"DynProductService")
            .finish()
    }
}

impl ProductSource {
    pub fn new(service: DynProductService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ListSource for ProductSource {
    type Item = ProductResponse;
    type Filters = ProductFilters;

    fn entity(&self) -> &'static str {
        "el producto"
    }

    async fn fetch(
        &self,
        pagination: &PaginationParams,
        filters: &ProductFilters,
    ) -> Result<ApiResponsePagination<ProductResponse>, ClientError> {
        self.service.find_all(pagination, filters).await
    }

    async fn remove(&self, id: i32) -> Result<(), ClientError> {
        self.service.delete(id).await.map(|_| ())
    }
}

#[derive(Debug, Clone, Validate)]
pub struct ProductDraft {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,
    #[validate(required(message = "Category is required"))]
    pub category_id: Option<i32>,
    pub active: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: 0.0,
            stock: 0,
            category_id: None,
            active: true,
        }
    }
}

impl ProductDraft {
    fn description(&self) -> Option<String> {
        let description = self.description.trim();
        (!description.is_empty()).then(|| description.to_string())
    }
}

#[async_trait]
impl FormSource for ProductSource {
    type Record = ProductResponse;
    type Draft = ProductDraft;

    fn edit_draft(record: &ProductResponse) -> (i32, ProductDraft) {
        let draft = ProductDraft {
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            price: record.price,
            stock: record.stock,
            category_id: Some(record.category_id),
            active: record.active,
        };
        (record.id, draft)
    }

    async fn create(&self, draft: &ProductDraft) -> Result<(), ServiceError> {
        let category_id = draft
            .category_id
            .ok_or_else(|| ServiceError::Validation(vec!["Category is required".to_string()]))?;

        let req = CreateProductRequest {
            name: draft.name.trim().to_string(),
            description: draft.description(),
            price: draft.price,
            stock: draft.stock,
            category_id,
            active: Some(draft.active),
        };
        req.validate()?;

        self.service.create(&req).await?;
        Ok(())
    }

    async fn update(&self, id: i32, draft: &ProductDraft) -> Result<(), ServiceError> {
        let req = UpdateProductRequest {
            name: Some(draft.name.trim().to_string()),
            description: draft.description(),
            price: Some(draft.price),
            stock: Some(draft.stock),
            category_id: draft.category_id,
            active: Some(draft.active),
        };
        self.service.update(id, &req).await?;
        Ok(())
    }
}
