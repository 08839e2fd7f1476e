use shared::{config::AuthMode, domain::responses::Role};

/// Route keys a `consumidor` may open.
pub const CONSUMER_ROUTES: [&str; 2] = ["productos", "dashboard"];

/// First path segment of a route, without slashes: `/productos/3` -> `productos`.
pub fn route_key(route: &str) -> &str {
    route
        .trim_start_matches('/')
        .split(['/', '?'])
        .next()
        .unwrap_or_default()
}

/// `admin` opens everything, `consumidor` only [`CONSUMER_ROUTES`], no role nothing.
pub fn can_access(role: Option<Role>, route: &str) -> bool {
    match role {
        Some(Role::Admin) => true,
        Some(Role::Consumidor) => CONSUMER_ROUTES.contains(&route_key(route)),
        None => false,
    }
}

/// Whether the router consults roles at all. The real backend issues role-less
/// sessions, so only the demo login runs under [`AccessPolicy::RoleBased`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    Unrestricted,
    RoleBased,
}

impl AccessPolicy {
    pub fn allows(&self, role: Option<Role>, route: &str) -> bool {
        match self {
            AccessPolicy::Unrestricted => true,
            AccessPolicy::RoleBased => can_access(role, route),
        }
    }
}

impl From<AuthMode> for AccessPolicy {
    fn from(mode: AuthMode) -> Self {
        match mode {
            AuthMode::Remote => AccessPolicy::Unrestricted,
            AuthMode::Fake => AccessPolicy::RoleBased,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_opens_everything() {
        for route in ["categorias", "usuarios", "/productos", "upgrade", ""] {
            assert!(can_access(Some(Role::Admin), route), "{route}");
        }
    }

    #[test]
    fn consumer_is_limited_to_products_and_dashboard() {
        assert!(can_access(Some(Role::Consumidor), "productos"));
        assert!(can_access(Some(Role::Consumidor), "/dashboard"));
        assert!(can_access(Some(Role::Consumidor), "/productos/12"));
        assert!(!can_access(Some(Role::Consumidor), "categorias"));
        assert!(!can_access(Some(Role::Consumidor), "/usuarios"));
    }

    #[test]
    fn no_role_opens_nothing() {
        assert!(!can_access(None, "dashboard"));
        assert!(!can_access(None, "productos"));
    }

    #[test]
    fn unrestricted_policy_ignores_roles() {
        assert!(AccessPolicy::Unrestricted.allows(None, "usuarios"));
        assert!(!AccessPolicy::RoleBased.allows(None, "usuarios"));
        assert_eq!(AccessPolicy::from(AuthMode::Fake), AccessPolicy::RoleBased);
    }

    #[test]
    fn route_key_strips_slashes_and_query() {
        assert_eq!(route_key("/productos/3"), "productos");
        assert_eq!(route_key("usuarios?page=2"), "usuarios");
        assert_eq!(route_key("/"), "");
    }
}
