use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Locally registered user together with its password hash.
///
/// Records from earlier versions carried a plaintext `password` field
/// instead of `hashword`; it is ignored on read, so such accounts
/// deserialize but never verify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    user: User,
    #[serde(default)]
    hashword: String,
}

impl Account {
    pub fn new(user: User, hashword: String) -> Self {
        Self { user, hashword }
    }
    pub fn user(&self) -> &User {
        &self.user
    }
    /// Login matches the account name or, if present, its email.
    pub fn answers_to(&self, login: &str) -> bool {
        self.user.handle() == login || self.user.email() == Some(login)
    }
    pub fn verify(&self, password: &str) -> bool {
        password::verify(password, &self.hashword)
    }
}
