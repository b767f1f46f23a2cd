use super::*;

/// Trimmed, non-empty login and password as typed into the auth form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    pub fn new(login: &str, password: &str) -> Result<Self, AuthError> {
        let login = login.trim();
        let password = password.trim();
        if login.is_empty() || password.is_empty() {
            return Err(AuthError::Incomplete);
        }
        Ok(Self {
            login: login.to_string(),
            password: password.to_string(),
        })
    }
    pub fn login(&self) -> &str {
        &self.login
    }
    pub fn password(&self) -> &str {
        &self.password
    }
    /// Providers key accounts by email; bare usernames get a synthetic one.
    pub fn email(&self) -> String {
        if self.login.contains('@') {
            self.login.clone()
        } else {
            format!("{}@{}", self.login, crate::SYNTHETIC_EMAIL_DOMAIN)
        }
    }
}
