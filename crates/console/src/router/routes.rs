use crate::{
    router::guard::{AuthGuard, LoginGuard, RoleGuard, RouteGuard},
    session::{AccessPolicy, SessionContext, route_key},
};
use std::fmt;
use tracing::{debug, info, warn};

pub const DEFAULT_ROUTE: &str = "/dashboard";
pub const LOGIN_ROUTE: &str = "/auth/login";

/// Upper bound on chained guard redirects before navigation gives up.
pub const MAX_REDIRECTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Categories,
    Products,
    Users,
    Login,
    Register,
    ForgotPassword,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Categories => "Categorías",
            View::Products => "Productos",
            View::Users => "Usuarios",
            View::Login => "Iniciar sesión",
            View::Register => "Registro",
            View::ForgotPassword => "Recuperar contraseña",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

pub struct Route {
    pub pattern: &'static str,
    pub view: View,
    pub guards: Vec<Box<dyn RouteGuard>>,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guards: Vec<&str> = self.guards.iter().map(|g| g.name()).collect();
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("view", &self.view)
            .field("guards", &guards)
            .finish()
    }
}

impl Route {
    fn new(pattern: &'static str, view: View) -> Self {
        Self {
            pattern,
            view,
            guards: Vec::new(),
        }
    }

    fn guarded(mut self, guard: impl RouteGuard + 'static) -> Self {
        self.guards.push(Box::new(guard));
        self
    }

    fn protected(pattern: &'static str, view: View, policy: AccessPolicy) -> Self {
        Self::new(pattern, view)
            .guarded(AuthGuard)
            .guarded(RoleGuard::new(pattern, policy))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Enter { path: String, view: View },
    /// Guards kept redirecting without settling on a view.
    Blocked { path: String },
}

#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(policy: AccessPolicy) -> Self {
        let routes = vec![
            Route::protected("dashboard", View::Dashboard, policy),
            Route::protected("categorias", View::Categories, policy),
            Route::protected("productos", View::Products, policy),
            Route::protected("usuarios", View::Users, policy),
            Route::new("auth/login", View::Login).guarded(LoginGuard),
            Route::new("auth/register", View::Register).guarded(LoginGuard),
            Route::new("auth/forgot-password", View::ForgotPassword).guarded(LoginGuard),
        ];

        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolves `path` to a view, following guard redirects.
    pub fn navigate(&self, session: &SessionContext, path: &str) -> Navigation {
        let mut current = normalize(path);

        for _ in 0..=MAX_REDIRECTS {
            let Some(route) = self.find(&current) else {
                debug!("No route for '/{current}', redirecting to {DEFAULT_ROUTE}");
                current = normalize(DEFAULT_ROUTE);
                continue;
            };

            match route.guards.iter().find(|g| !g.can_enter(session)) {
                Some(guard) => {
                    info!(
                        "Guard '{}' refused '/{current}', redirecting to {}",
                        guard.name(),
                        guard.redirect()
                    );
                    current = normalize(guard.redirect());
                }
                None => {
                    return Navigation::Enter {
                        path: format!("/{current}"),
                        view: route.view,
                    };
                }
            }
        }

        warn!("Too many redirects navigating to '{path}'");
        Navigation::Blocked {
            path: path.to_string(),
        }
    }

    fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.pattern == path)
    }
}

fn normalize(path: &str) -> String {
    let path = path.split('?').next().unwrap_or_default();
    let trimmed = path.trim_matches('/');

    // Sub-paths of a top-level entity page resolve to the page itself.
    if trimmed.starts_with("auth/") {
        trimmed.to_string()
    } else {
        route_key(trimmed).to_string()
    }
}
