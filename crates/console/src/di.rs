use crate::service::{
    ApiClient, AuthService, CategoryService, FakeAuthService, ProductService, UserService,
};
use shared::{
    abstract_trait::{DynAuthService, DynCategoryService, DynProductService, DynUserService},
    config::{AuthMode, Config},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub category_service: DynCategoryService,
    pub product_service: DynProductService,
    pub user_service: DynUserService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("category_service", &"DynCategoryService")
            .field("product_service", &"DynProductService")
            .field("user_service", &"DynUserService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(api: ApiClient, config: &Config) -> Self {
        let auth_service: DynAuthService = match config.auth_mode {
            AuthMode::Remote => Arc::new(AuthService::new(api.clone())),
            AuthMode::Fake => {
                info!(
                    "Using demo credentials ({}ms simulated latency)",
                    config.fake_auth_delay.as_millis()
                );
                Arc::new(FakeAuthService::new(config.fake_auth_delay))
            }
        };

        let category_service: DynCategoryService = Arc::new(CategoryService::new(api.clone()));
        let product_service: DynProductService = Arc::new(ProductService::new(api.clone()));
        let user_service: DynUserService = Arc::new(UserService::new(api));

        Self {
            auth_service,
            category_service,
            product_service,
            user_service,
        }
    }
}
