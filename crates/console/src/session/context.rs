use crate::session::access::can_access;
use shared::{
    abstract_trait::{DynKeyValueStore, TokenSourceTrait},
    domain::responses::{LoginResponse, Role, SessionUser},
    errors::{ServiceError, StorageError},
};
use tokio::sync::watch;
use tracing::{error, info, warn};

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "user_data";
pub const ROLE_KEY: &str = "user_role";

/// Holder of the logged-in user. Persists through a key-value store and
/// broadcasts every change on a watch channel.
pub struct SessionContext {
    store: DynKeyValueStore,
    user: watch::Sender<Option<SessionUser>>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("store", &"DynKeyValueStore")
            .field("user", &*self.user.borrow())
            .finish()
    }
}

impl SessionContext {
    /// Builds the context and restores the persisted user, if any.
    pub fn new(store: DynKeyValueStore) -> Self {
        let (user, _) = watch::channel(None);
        let context = Self { store, user };
        context.restore();
        context
    }

    fn restore(&self) {
        let raw = match self.store.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                error!("Failed to read stored user: {e}");
                return;
            }
        };

        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => {
                info!("Restored session for {}", user.email);
                self.user.send_replace(Some(user));
            }
            Err(e) => {
                warn!("Stored user data is corrupt, logging out: {e}");
                if let Err(e) = self.logout() {
                    error!("Failed to clear corrupt session: {e}");
                }
            }
        }
    }

    /// Persists user, role and token from a successful login and publishes the user.
    ///
    /// The token is written last. If any write fails the whole session is cleared,
    /// so a token never outlives the user it belongs to.
    pub fn set_user_data(&self, login: &LoginResponse) -> Result<(), ServiceError> {
        let user_json = serde_json::to_string(&login.user)
            .map_err(|e| ServiceError::Internal(format!("Failed to encode user: {e}")))?;

        if let Err(e) = self.persist(&user_json, login) {
            error!("Failed to persist session for {}: {e}", login.user.email);
            if let Err(e) = self.logout() {
                error!("Failed to clear partial session: {e}");
            }
            return Err(e.into());
        }

        info!("Session started for {}", login.user.email);
        self.user.send_replace(Some(login.user.clone()));
        Ok(())
    }

    fn persist(&self, user_json: &str, login: &LoginResponse) -> Result<(), StorageError> {
        self.store.set(USER_KEY, user_json)?;
        match login.role {
            Some(role) => self.store.set(ROLE_KEY, role.as_str())?,
            None => self.store.remove(ROLE_KEY)?,
        }
        self.store.set(TOKEN_KEY, &login.access_token)
    }

    /// Clears all persisted keys and publishes `None`.
    pub fn logout(&self) -> Result<(), StorageError> {
        let mut result = Ok(());
        for key in [TOKEN_KEY, USER_KEY, ROLE_KEY] {
            if let Err(e) = self.store.remove(key) {
                error!("Failed to remove {key}: {e}");
                result = Err(e);
            }
        }

        self.user.send_replace(None);
        info!("Session closed");
        result
    }

    pub fn token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                error!("Failed to read token: {e}");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.user.borrow().clone()
    }

    /// Receiver that observes every login and logout after this call.
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionUser>> {
        self.user.subscribe()
    }

    /// Role stored with the session. Unknown values are treated as no role.
    pub fn role(&self) -> Option<Role> {
        let raw = match self.store.get(ROLE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                error!("Failed to read role: {e}");
                return None;
            }
        };

        raw.parse()
            .inspect_err(|e| warn!("Ignoring stored role: {e}"))
            .ok()
    }

    pub fn can_access(&self, route: &str) -> bool {
        can_access(self.role(), route)
    }
}

impl TokenSourceTrait for SessionContext {
    fn bearer_token(&self) -> Option<String> {
        self.token()
    }
}
