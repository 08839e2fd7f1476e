mod category;
mod form;
mod list;
mod product;
mod user;

pub use self::category::{
    CategoryDraft, CategoryFormController, CategoryListController, CategorySource,
};
pub use self::form::{FormController, FormMode, FormSource, not_blank};
pub use self::list::{
    DeleteOutcome, ListController, ListSource, LoadOutcome, LoadState, LoadTicket,
};
pub use self::product::{ProductDraft, ProductFormController, ProductListController, ProductSource};
pub use self::user::{UserListController, UserSource};
