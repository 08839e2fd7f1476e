use crate::errors::StorageError;
use std::sync::Arc;

pub type DynKeyValueStore = Arc<dyn KeyValueStoreTrait + Send + Sync>;

/// Persistent string key-value storage backing the session.
pub trait KeyValueStoreTrait {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
