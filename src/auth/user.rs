use crate::DEFAULT_AVATAR;
use crate::DEFAULT_NAME;
use serde::Deserialize;
use serde::Serialize;

/// Authenticated player profile. Also the shape of the persisted session.
///
/// Aliases accept records written by earlier versions of the page
/// (`uid`, `ign`, `photo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "uid")]
    id: String,
    #[serde(alias = "ign", default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default)]
    credits: u32,
    #[serde(alias = "photo", default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl User {
    pub fn new(
        id: String,
        name: String,
        email: Option<String>,
        credits: u32,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            credits,
            avatar,
        }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    /// Name for display: the account name, else the email, else a generic one.
    pub fn name(&self) -> &str {
        Some(self.name.as_str())
            .filter(|s| !s.is_empty())
            .or(self.email.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_NAME)
    }
    /// Account name as stored, without display fallbacks.
    pub fn handle(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
    pub fn credits(&self) -> u32 {
        self.credits
    }
    pub fn avatar(&self) -> &str {
        self.avatar
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_AVATAR)
    }
}
