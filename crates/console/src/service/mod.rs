mod api;
mod auth;
mod category;
mod fake_auth;
mod product;
mod user;

pub use self::api::{ApiClient, ReqwestTransport};
pub use self::auth::AuthService;
pub use self::category::CategoryService;
pub use self::fake_auth::{FAKE_TOKEN_PREFIX, FakeAccount, FakeAuthService};
pub use self::product::ProductService;
pub use self::user::UserService;
