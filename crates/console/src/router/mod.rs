mod guard;
mod routes;

pub use self::guard::{AuthGuard, LoginGuard, RoleGuard, RouteGuard};
pub use self::routes::{DEFAULT_ROUTE, LOGIN_ROUTE, MAX_REDIRECTS, Navigation, Route, Router, View};
