use crate::service::api::ApiClient;
use async_trait::async_trait;
use shared::{
    abstract_trait::AuthServiceTrait,
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, LoginResponse},
    },
    errors::ServiceError,
};
use tracing::{error, info};

/// Login against the real backend. Sessions from here carry no role.
#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(
        &self,
        credentials: &LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, ServiceError> {
        info!("Logging in {}", credentials.email);

        match self.api.post("/auth/login", credentials).await {
            Ok(response) => {
                info!("Login succeeded for {}", credentials.email);
                Ok(response)
            }
            Err(e) if e.is_unauthorized() => {
                error!("Rejected credentials for {}", credentials.email);
                Err(ServiceError::InvalidCredentials)
            }
            Err(e) => {
                error!("Login failed for {}: {e}", credentials.email);
                Err(e.into())
            }
        }
    }
}
