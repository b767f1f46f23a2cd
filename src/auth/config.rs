use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Web configuration of the remote identity provider.
///
/// Pages ship with placeholder values; remote authentication is enabled
/// only once the API key has been replaced with a real one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl RemoteConfig {
    pub fn configured(&self) -> bool {
        !self.api_key.trim().is_empty() && self.api_key != crate::PLACEHOLDER_API_KEY
    }
    pub fn validate(self) -> Result<Self, AuthError> {
        if self.configured() {
            Ok(self)
        } else {
            Err(AuthError::ProviderNotConfigured)
        }
    }
    /// Malformed JSON reads as no configuration.
    pub fn parse(json: &str) -> Option<Self> {
        serde_json::from_str::<Self>(json)
            .map_err(|e| log::warn!("ignoring malformed provider config: {}", e))
            .ok()
    }
}
