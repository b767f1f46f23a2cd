use crate::store::Storage;
use crate::store::StorageError;

/// The window's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage(web_sys::Storage);

impl LocalStorage {
    /// Fails when there is no window or the browser has storage disabled.
    pub fn open() -> Result<Self, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError("no window".into()))?
            .local_storage()
            .map_err(|e| StorageError(super::describe(&e)))?
            .map(Self)
            .ok_or_else(|| StorageError("localStorage is disabled".into()))
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0
            .get_item(key)
            .map_err(|e| StorageError(super::describe(&e)))
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0
            .set_item(key, value)
            .map_err(|e| StorageError(super::describe(&e)))
    }
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0
            .remove_item(key)
            .map_err(|e| StorageError(super::describe(&e)))
    }
}
