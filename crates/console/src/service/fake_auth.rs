use async_trait::async_trait;
use chrono::Utc;
use shared::{
    abstract_trait::AuthServiceTrait,
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, LoginResponse, Role, SessionUser},
    },
    errors::ServiceError,
};
use std::time::Duration;
use tracing::{info, warn};
use validator::Validate;

pub const FAKE_TOKEN_PREFIX: &str = "fake_token_";

/// One entry of the demo credential table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeAccount {
    pub id: i32,
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub first_name: &'static str,
    pub last_name: &'static str,
}

const ACCOUNTS: [FakeAccount; 2] = [
    FakeAccount {
        id: 1,
        username: "admin",
        password: "admin123",
        role: Role::Admin,
        first_name: "Administrador",
        last_name: "Sistema",
    },
    FakeAccount {
        id: 2,
        username: "consumidor",
        password: "consumidor123",
        role: Role::Consumidor,
        first_name: "Consumidor",
        last_name: "Demo",
    },
];

/// Demo login with a hardcoded table of two accounts. Simulates network latency.
#[derive(Debug, Clone)]
pub struct FakeAuthService {
    delay: Duration,
}

impl FakeAuthService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn accounts() -> &'static [FakeAccount] {
        &ACCOUNTS
    }

    fn find_account(credentials: &LoginRequest) -> Option<&'static FakeAccount> {
        ACCOUNTS
            .iter()
            .find(|a| a.username == credentials.email && a.password == credentials.password)
    }
}

impl Default for FakeAuthService {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl AuthServiceTrait for FakeAuthService {
    async fn login(
        &self,
        credentials: &LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, ServiceError> {
        credentials.validate()?;

        info!("Fake login for '{}'", credentials.email);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let Some(account) = Self::find_account(credentials) else {
            warn!("Fake login rejected for '{}'", credentials.email);
            return Err(ServiceError::InvalidCredentials);
        };

        let response = LoginResponse {
            access_token: format!("{FAKE_TOKEN_PREFIX}{}", Utc::now().timestamp_millis()),
            token_type: "bearer".to_string(),
            user: SessionUser {
                id: account.id,
                email: account.username.to_string(),
                first_name: account.first_name.to_string(),
                last_name: account.last_name.to_string(),
                active: true,
            },
            role: Some(account.role),
        };

        info!("Fake login succeeded for '{}' as {}", account.username, account.role);

        Ok(ApiResponse::ok("Login successful", response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_accounts_get_their_role() {
        let service = FakeAuthService::new(Duration::ZERO);

        let admin = service
            .login(&LoginRequest::new("admin", "admin123"))
            .await
            .unwrap();
        assert!(admin.success);
        assert_eq!(admin.data.role, Some(Role::Admin));
        assert!(admin.data.access_token.starts_with(FAKE_TOKEN_PREFIX));

        let consumer = service
            .login(&LoginRequest::new("consumidor", "consumidor123"))
            .await
            .unwrap();
        assert_eq!(consumer.data.role, Some(Role::Consumidor));
        assert_eq!(consumer.data.user.id, 2);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let service = FakeAuthService::new(Duration::ZERO);

        let err = service
            .login(&LoginRequest::new("admin", "consumidor123"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn empty_credentials_fail_validation() {
        let service = FakeAuthService::new(Duration::ZERO);

        let err = service
            .login(&LoginRequest::new("", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(ref msgs) if msgs.len() == 2));
    }
}
