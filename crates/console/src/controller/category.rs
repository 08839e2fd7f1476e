use crate::controller::{
    form::{FormController, FormSource, not_blank},
    list::{ListController, ListSource},
};
use async_trait::async_trait;
use shared::{
    abstract_trait::DynCategoryService,
    domain::{
        requests::{
            CategoryFilters, CreateCategoryRequest, PaginationParams, UpdateCategoryRequest,
        },
        responses::{ApiResponsePagination, CategoryResponse},
    },
    errors::{ClientError, ServiceError},
};
use validator::Validate;

pub type CategoryListController = ListController<CategorySource>;
pub type CategoryFormController = FormController<CategorySource>;

#[derive(Clone)]
pub struct CategorySource {
    service: DynCategoryService,
}

impl std::fmt::Debug for CategorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategorySource")
            .field("service", &"DynCategoryService")
            .finish()
    }
}

impl CategorySource {
    pub fn new(service: DynCategoryService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ListSource for CategorySource {
    type Item = CategoryResponse;
    type Filters = CategoryFilters;

    fn entity(&self) -> &'static str {
        "la categoría"
    }

    async fn fetch(
        &self,
        pagination: &PaginationParams,
        filters: &CategoryFilters,
    ) -> Result<ApiResponsePagination<CategoryResponse>, ClientError> {
        self.service.find_all(pagination, filters).await
    }

    async fn remove(&self, id: i32) -> Result<(), ClientError> {
        self.service.delete(id).await.map(|_| ())
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CategoryDraft {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            active: true,
        }
    }
}

impl CategoryDraft {
    fn description(&self) -> Option<String> {
        let description = self.description.trim();
        (!description.is_empty()).then(|| description.to_string())
    }
}

#[async_trait]
impl FormSource for CategorySource {
    type Record = CategoryResponse;
    type Draft = CategoryDraft;

    fn edit_draft(record: &CategoryResponse) -> (i32, CategoryDraft) {
        let draft = CategoryDraft {
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            active: record.active,
        };
        (record.id, draft)
    }

    async fn create(&self, draft: &CategoryDraft) -> Result<(), ServiceError> {
        let req = CreateCategoryRequest {
            name: draft.name.trim().to_string(),
            description: draft.description(),
            active: Some(draft.active),
        };
        self.service.create(&req).await?;
        Ok(())
    }

    async fn update(&self, id: i32, draft: &CategoryDraft) -> Result<(), ServiceError> {
        let req = UpdateCategoryRequest {
            name: Some(draft.name.trim().to_string()),
            description: draft.description(),
            active: Some(draft.active),
        };
        self.service.update(id, &req).await?;
        Ok(())
    }
}
