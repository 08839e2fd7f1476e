mod auth;
mod category;
mod pagination;
mod product;
mod user;

pub use self::auth::LoginRequest;
pub use self::category::{CategoryFilters, CreateCategoryRequest, UpdateCategoryRequest};
pub use self::pagination::{DEFAULT_PAGE_SIZE, PaginationParams, SortOrder};
pub use self::product::{CreateProductRequest, ProductFilters, UpdateProductRequest};
pub use self::user::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, UserFilters};
