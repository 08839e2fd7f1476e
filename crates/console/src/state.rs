use crate::{
    di::DependenciesInject,
    router::{Navigation, Router},
    service::{ApiClient, ReqwestTransport},
    session::{AccessPolicy, SessionContext},
    store::FileStore,
};
use anyhow::{Context, Result};
use shared::{
    abstract_trait::{DynHttpTransport, DynKeyValueStore, DynTokenSource},
    config::Config,
    domain::{
        requests::{CreateUserRequest, LoginRequest},
        responses::{LoginResponse, UserResponse},
    },
    errors::ServiceError,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub session: Arc<SessionContext>,
    pub di_container: DependenciesInject,
    pub router: Arc<Router>,
    pub access_policy: AccessPolicy,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("di_container", &self.di_container)
            .field("access_policy", &self.access_policy)
            .finish()
    }
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let transport = ReqwestTransport::new(config.api_url.clone())
            .context("Failed to create HTTP transport")?;

        let store = FileStore::open(&config.session_file).with_context(|| {
            format!(
                "Failed to open session file {}",
                config.session_file.display()
            )
        })?;

        info!(
            "Console ready (api: {}, auth: {:?}, session: {})",
            config.api_url,
            config.auth_mode,
            config.session_file.display()
        );

        Ok(Self::with_parts(config, Arc::new(transport), Arc::new(store)))
    }

    /// Wires the console over an arbitrary transport and store.
    pub fn with_parts(config: Config, transport: DynHttpTransport, store: DynKeyValueStore) -> Self {
        let session = Arc::new(SessionContext::new(store));
        let token_source: DynTokenSource = session.clone();
        let api = ApiClient::new(transport).with_token_source(token_source);

        let access_policy = AccessPolicy::from(config.auth_mode);
        let di_container = DependenciesInject::new(api, &config);
        let router = Arc::new(Router::new(access_policy));

        Self {
            config,
            session,
            di_container,
            router,
            access_policy,
        }
    }

    pub fn navigate(&self, path: &str) -> Navigation {
        self.router.navigate(&self.session, path)
    }

    /// Authenticates and stores the session.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ServiceError> {
        let response = self
            .di_container
            .auth_service
            .login(credentials)
            .await
            .inspect_err(|e| error!("Login failed: {e}"))?;

        self.session.set_user_data(&response.data)?;
        Ok(response.data)
    }

    /// Creates the account through the users endpoint. The new user is not logged in.
    pub async fn register(&self, req: &CreateUserRequest) -> Result<UserResponse, ServiceError> {
        let response = self.di_container.user_service.create(req).await?;
        info!("Registered {}", response.data.email);
        Ok(response.data)
    }

    pub fn logout(&self) -> Result<(), ServiceError> {
        self.session.logout()?;
        Ok(())
    }
}
