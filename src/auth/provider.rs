use super::*;

/// Federated sign-in services offered on the auth modal.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Federation {
    #[default]
    Google,
}

impl Federation {
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }
}

impl std::fmt::Display for Federation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Authentication capability the UI controller depends on.
///
/// Successful sign-ins persist the session before returning, so
/// [`AuthProvider::current`] reflects them immediately and after a reload.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    async fn login(&self, login: &str, password: &str) -> Result<User, AuthError>;
    async fn register(&self, login: &str, password: &str) -> Result<User, AuthError>;
    async fn federated(&self, federation: Federation) -> Result<User, AuthError>;
    async fn logout(&self) -> Result<(), AuthError>;
    /// Persisted session, if any. Unreadable data counts as none.
    fn current(&self) -> Option<User>;
}
