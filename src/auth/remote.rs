use super::*;
use crate::DEFAULT_NAME;
use crate::REMOTE_CREDITS;
use crate::store::SessionStore;
use crate::store::Storage;

/// Routes authentication to a remote [`Identity`] service.
///
/// Remote accounts never touch the local [`Registry`]; only the
/// current-session pointer is persisted so a reload keeps the profile.
#[derive(Debug, Clone)]
pub struct RemoteProvider<S, I> {
    store: SessionStore<S>,
    identity: I,
    config: RemoteConfig,
}

impl<S, I> RemoteProvider<S, I>
where
    S: Storage,
{
    /// Fails with [`AuthError::ProviderNotConfigured`] for placeholder configs.
    pub fn new(store: SessionStore<S>, identity: I, config: RemoteConfig) -> Result<Self, AuthError> {
        Ok(Self {
            store,
            identity,
            config: config.validate()?,
        })
    }
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }
    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }
    fn begin(&self, user: User) -> Result<User, AuthError> {
        self.store.begin(&user)?;
        log::info!("signed in remote account {}", user.id());
        Ok(user)
    }
}

impl<S, I> RemoteProvider<S, I>
where
    S: Storage + Clone + 'static,
    I: Identity,
{
    /// Follow provider auth-state changes, keeping the persisted session
    /// in step. `listener` receives the resulting session user.
    pub fn watch<F>(&self, listener: F)
    where
        F: Fn(Option<User>) + 'static,
    {
        let store = self.store.clone();
        self.identity.subscribe(Box::new(move |profile| {
            let user = profile.map(|profile| {
                store
                    .current()
                    .filter(|user| user.id() == profile.uid)
                    .unwrap_or_else(|| assemble(profile, None))
            });
            let persisted = match user {
                Some(ref user) => store.begin(user),
                None => store.end(),
            };
            if let Err(e) = persisted {
                log::warn!("cannot persist provider session: {}", e);
            }
            listener(user);
        }));
    }
}

/// Assemble a user from provider fields, preferring `name` when given.
fn assemble(profile: Profile, name: Option<&str>) -> User {
    let display = name
        .map(str::to_string)
        .or(profile.display_name.filter(|s| !s.is_empty()))
        .or(profile.email.clone())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());
    User::new(
        profile.uid,
        display,
        profile.email,
        REMOTE_CREDITS,
        profile.photo_url,
    )
}

impl<S, I> AuthProvider for RemoteProvider<S, I>
where
    S: Storage,
    I: Identity,
{
    async fn login(&self, login: &str, password: &str) -> Result<User, AuthError> {
        let credentials = Credentials::new(login, password)?;
        let profile = self
            .identity
            .sign_in(credentials.login(), credentials.password())
            .await
            .map_err(|r| AuthError::InvalidCredentials(r.0))?;
        self.begin(assemble(profile, None))
    }

    async fn register(&self, login: &str, password: &str) -> Result<User, AuthError> {
        let credentials = Credentials::new(login, password)?;
        let email = credentials.email();
        let profile = self
            .identity
            .sign_up(&email, credentials.password())
            .await
            .map_err(|r| AuthError::ProviderError(r.0))?;
        let profile = Profile {
            email: profile.email.or(Some(email)),
            ..profile
        };
        self.begin(assemble(profile, Some(credentials.login())))
    }

    async fn federated(&self, federation: Federation) -> Result<User, AuthError> {
        let profile = self
            .identity
            .sign_in_federated(federation)
            .await
            .map_err(|r| AuthError::ProviderError(r.0))?;
        self.begin(assemble(profile, None))
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.identity
            .sign_out()
            .await
            .map_err(|r| AuthError::ProviderError(r.0))?;
        self.store.end()?;
        log::info!("signed out of remote provider");
        Ok(())
    }

    fn current(&self) -> Option<User> {
        self.store.current()
    }
}
