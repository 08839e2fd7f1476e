mod access;
mod context;

pub use self::access::{AccessPolicy, CONSUMER_ROUTES, can_access, route_key};
pub use self::context::{ROLE_KEY, SessionContext, TOKEN_KEY, USER_KEY};
