use super::*;

/// Profile fields reported by a remote identity service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

/// Error text reported by a remote identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection(pub String);

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Rejection {}

/// The five operations consumed from a remote identity service.
#[allow(async_fn_in_trait)]
pub trait Identity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Profile, Rejection>;
    async fn sign_up(&self, email: &str, password: &str) -> Result<Profile, Rejection>;
    async fn sign_in_federated(&self, federation: Federation) -> Result<Profile, Rejection>;
    async fn sign_out(&self) -> Result<(), Rejection>;
    /// Invoked with the signed-in profile, or `None`, on every auth state change.
    fn subscribe(&self, listener: Box<dyn Fn(Option<Profile>)>);
}
