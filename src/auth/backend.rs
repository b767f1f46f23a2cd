use super::*;
use crate::store::SessionStore;
use crate::store::Storage;

/// The authentication backend chosen once at startup.
#[derive(Debug, Clone)]
pub enum Backend<S, I> {
    Local(LocalProvider<S>),
    Remote(RemoteProvider<S, I>),
}

impl<S, I> Backend<S, I>
where
    S: Storage + Clone,
    I: Identity,
{
    /// Remote when `config` is usable and `connect` succeeds, local otherwise.
    pub fn select<F>(config: Option<RemoteConfig>, store: SessionStore<S>, connect: F) -> Self
    where
        F: FnOnce(&RemoteConfig) -> Result<I, Rejection>,
    {
        let Some(config) = config.filter(RemoteConfig::configured) else {
            log::info!("remote provider not configured, using local accounts");
            return Self::Local(LocalProvider::new(store));
        };
        match connect(&config) {
            Err(e) => {
                log::warn!("remote provider init failed, using local accounts: {}", e);
                Self::Local(LocalProvider::new(store))
            }
            Ok(identity) => match RemoteProvider::new(store.clone(), identity, config) {
                Ok(remote) => {
                    log::info!("using remote provider");
                    Self::Remote(remote)
                }
                Err(_) => Self::Local(LocalProvider::new(store)),
            },
        }
    }
}

impl<S, I> Backend<S, I>
where
    S: Storage,
{
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
    pub fn store(&self) -> &SessionStore<S> {
        match self {
            Self::Local(local) => local.store(),
            Self::Remote(remote) => remote.store(),
        }
    }
}

impl<S, I> AuthProvider for Backend<S, I>
where
    S: Storage,
    I: Identity,
{
    async fn login(&self, login: &str, password: &str) -> Result<User, AuthError> {
        match self {
            Self::Local(local) => local.login(login, password).await,
            Self::Remote(remote) => remote.login(login, password).await,
        }
    }
    async fn register(&self, login: &str, password: &str) -> Result<User, AuthError> {
        match self {
            Self::Local(local) => local.register(login, password).await,
            Self::Remote(remote) => remote.register(login, password).await,
        }
    }
    async fn federated(&self, federation: Federation) -> Result<User, AuthError> {
        match self {
            Self::Local(local) => local.federated(federation).await,
            Self::Remote(remote) => remote.federated(federation).await,
        }
    }
    async fn logout(&self) -> Result<(), AuthError> {
        match self {
            Self::Local(local) => local.logout().await,
            Self::Remote(remote) => remote.logout().await,
        }
    }
    fn current(&self) -> Option<User> {
        match self {
            Self::Local(local) => local.current(),
            Self::Remote(remote) => remote.current(),
        }
    }
}
