use crate::{
    router::routes::{DEFAULT_ROUTE, LOGIN_ROUTE},
    session::{AccessPolicy, SessionContext},
};

/// Check run before a view is entered. A refusal sends the user to [`RouteGuard::redirect`].
pub trait RouteGuard: Send + Sync {
    fn name(&self) -> &'static str;

    fn can_enter(&self, session: &SessionContext) -> bool;

    fn redirect(&self) -> &'static str;
}

/// Requires a session token.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthGuard;

impl RouteGuard for AuthGuard {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn can_enter(&self, session: &SessionContext) -> bool {
        session.is_authenticated()
    }

    fn redirect(&self) -> &'static str {
        LOGIN_ROUTE
    }
}

/// Keeps logged-in users away from the login and register pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginGuard;

impl RouteGuard for LoginGuard {
    fn name(&self) -> &'static str {
        "login"
    }

    fn can_enter(&self, session: &SessionContext) -> bool {
        !session.is_authenticated()
    }

    fn redirect(&self) -> &'static str {
        DEFAULT_ROUTE
    }
}

/// Checks the session role against one route key.
#[derive(Debug, Clone, Copy)]
pub struct RoleGuard {
    route: &'static str,
    policy: AccessPolicy,
}

impl RoleGuard {
    pub fn new(route: &'static str, policy: AccessPolicy) -> Self {
        Self { route, policy }
    }
}

impl RouteGuard for RoleGuard {
    fn name(&self) -> &'static str {
        "role"
    }

    fn can_enter(&self, session: &SessionContext) -> bool {
        self.policy.allows(session.role(), self.route)
    }

    fn redirect(&self) -> &'static str {
        DEFAULT_ROUTE
    }
}
