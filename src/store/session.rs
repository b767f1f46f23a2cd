use super::*;
use crate::CURRENT_KEY;
use crate::USERS_KEY;
use crate::auth::Registry;
use crate::auth::User;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Typed access to the two persisted records: the local account
/// registry and the current-session user.
///
/// Reads never fail: missing, unreadable or malformed records are
/// reported as empty. Writes go straight through to storage.
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S> SessionStore<S>
where
    S: Storage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
    pub fn storage(&self) -> &S {
        &self.storage
    }
    pub fn registry(&self) -> Registry {
        self.read(USERS_KEY).unwrap_or_default()
    }
    pub fn persist(&self, registry: &Registry) -> Result<(), StorageError> {
        self.write(USERS_KEY, registry)
    }
    pub fn current(&self) -> Option<User> {
        self.read(CURRENT_KEY)
    }
    pub fn begin(&self, user: &User) -> Result<(), StorageError> {
        self.write(CURRENT_KEY, user)
    }
    /// Idempotent.
    pub fn end(&self) -> Result<(), StorageError> {
        self.storage.remove(CURRENT_KEY)
    }

    fn read<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        match self.storage.get(key) {
            Err(e) => {
                log::warn!("cannot read {}: {}", key, e);
                None
            }
            Ok(None) => None,
            Ok(Some(json)) => serde_json::from_str::<Option<T>>(&json)
                .map_err(|e| log::warn!("discarding corrupt {}: {}", key, e))
                .ok()
                .flatten(),
        }
    }
    fn write<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(value)?;
        self.storage.set(key, &json)
    }
}
