mod api;
mod auth;
mod category;
mod product;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination, EmptyData};
pub use self::auth::{LoginResponse, Role, SessionUser};
pub use self::category::CategoryResponse;
pub use self::product::{CategorySummary, ProductResponse};
pub use self::user::UserResponse;
