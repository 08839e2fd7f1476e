mod auth;
mod category;
mod confirm;
mod http;
mod product;
mod storage;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::category::{CategoryServiceTrait, DynCategoryService};
pub use self::confirm::{ConfirmPromptTrait, DynConfirmPrompt};
pub use self::http::{
    ApiReply, ApiRequest, DynHttpTransport, DynTokenSource, HttpMethod, HttpTransportTrait,
    TokenSourceTrait,
};
pub use self::product::{DynProductService, ProductServiceTrait};
pub use self::storage::{DynKeyValueStore, KeyValueStoreTrait};
pub use self::user::{DynUserService, UserServiceTrait};
