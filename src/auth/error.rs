use crate::store::StorageError;

/// Failures surfaced to the user by an authentication attempt.
/// None of them change the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Username or password left blank.
    Incomplete,
    /// Registration name already taken.
    AlreadyExists,
    InvalidCredentials(String),
    /// Remote sign-in requested without a usable provider configuration.
    ProviderNotConfigured,
    /// Network, popup or provider-side failure, message passed through.
    ProviderError(String),
    StorageUnavailable(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Incomplete => write!(f, "Fill username & password"),
            Self::AlreadyExists => write!(f, "Username exists"),
            Self::InvalidCredentials(s) => write!(f, "{}", s),
            Self::ProviderNotConfigured => write!(
                f,
                "Firebase not configured. Paste config in the page to enable Google login."
            ),
            Self::ProviderError(s) => write!(f, "{}", s),
            Self::StorageUnavailable(s) => write!(f, "storage unavailable: {}", s),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<StorageError> for AuthError {
    fn from(e: StorageError) -> Self {
        Self::StorageUnavailable(e.to_string())
    }
}
