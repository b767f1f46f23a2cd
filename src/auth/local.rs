use super::*;
use crate::LOCAL_CREDITS;
use crate::LOCAL_ID_PREFIX;
use crate::store::SessionStore;
use crate::store::Storage;

/// Accounts and sessions kept entirely in client storage.
#[derive(Debug, Clone)]
pub struct LocalProvider<S> {
    store: SessionStore<S>,
}

impl<S> LocalProvider<S>
where
    S: Storage,
{
    pub fn new(store: SessionStore<S>) -> Self {
        Self { store }
    }
    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }
    fn id() -> String {
        format!("{}{}", LOCAL_ID_PREFIX, uuid::Uuid::now_v7().simple())
    }
}

impl<S> AuthProvider for LocalProvider<S>
where
    S: Storage,
{
    async fn register(&self, login: &str, password: &str) -> Result<User, AuthError> {
        let credentials = Credentials::new(login, password)?;
        let previous = self.store.registry();
        if previous.contains(credentials.login()) {
            return Err(AuthError::AlreadyExists);
        }
        let hashword = password::hash(credentials.password())
            .map_err(|e| AuthError::StorageUnavailable(format!("cannot hash password: {}", e)))?;
        let user = User::new(
            Self::id(),
            credentials.login().to_string(),
            None,
            LOCAL_CREDITS,
            None,
        );
        let mut registry = previous.clone();
        registry.insert(Account::new(user.clone(), hashword))?;
        self.store.persist(&registry)?;
        if let Err(e) = self.store.begin(&user) {
            // a failed registration must not leave the account behind
            if let Err(undo) = self.store.persist(&previous) {
                log::warn!("cannot roll back registry: {}", undo);
            }
            return Err(e.into());
        }
        log::info!("registered local account {}", user.id());
        Ok(user)
    }

    async fn login(&self, login: &str, password: &str) -> Result<User, AuthError> {
        let credentials = Credentials::new(login, password)?;
        let user = self
            .store
            .registry()
            .find(credentials.login(), credentials.password())
            .map(|account| account.user().clone())
            .ok_or_else(|| AuthError::InvalidCredentials("Invalid credentials".to_string()))?;
        self.store.begin(&user)?;
        log::info!("signed in local account {}", user.id());
        Ok(user)
    }

    async fn federated(&self, federation: Federation) -> Result<User, AuthError> {
        log::debug!("{} sign-in requested without a remote provider", federation);
        Err(AuthError::ProviderNotConfigured)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.store.end()?;
        Ok(())
    }

    fn current(&self) -> Option<User> {
        self.store.current()
    }
}
