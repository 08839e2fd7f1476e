mod client;
mod service;
mod storage;

pub use self::client::ClientError;
pub use self::service::ServiceError;
pub use self::storage::StorageError;
