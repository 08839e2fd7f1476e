use crate::controller::list::{ListController, ListSource};
use async_trait::async_trait;
use shared::{
    abstract_trait::DynUserService,
    domain::{
        requests::{PaginationParams, UserFilters},
        responses::{ApiResponsePagination, UserResponse},
    },
    errors::ClientError,
};

pub type UserListController = ListController<UserSource>;

#[derive(Clone)]
pub struct UserSource {
    service: DynUserService,
}

impl std::fmt::Debug for UserSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSource")
            .field("service", &"DynUserService")
            .finish()
    }
}

impl UserSource {
    pub fn new(service: DynUserService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ListSource for UserSource {
    type Item = UserResponse;
    type Filters = UserFilters;

    fn entity(&self) -> &'static str {
        "el usuario"
    }

    async fn fetch(
        &self,
        pagination: &PaginationParams,
        filters: &UserFilters,
    ) -> Result<ApiResponsePagination<UserResponse>, ClientError> {
        self.service.find_all(pagination, filters).await
    }

    async fn remove(&self, id: i32) -> Result<(), ClientError> {
        self.service.delete(id).await.map(|_| ())
    }
}
