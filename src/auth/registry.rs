use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Locally registered accounts, unique by name, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry(Vec<Account>);

impl Registry {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.0.iter()
    }
    /// Case-sensitive exact name match.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|a| a.user().handle() == name)
    }
    pub fn find(&self, login: &str, password: &str) -> Option<&Account> {
        self.0
            .iter()
            .filter(|a| a.answers_to(login))
            .find(|a| a.verify(password))
    }
    pub fn insert(&mut self, account: Account) -> Result<(), AuthError> {
        if self.contains(account.user().handle()) {
            return Err(AuthError::AlreadyExists);
        }
        self.0.push(account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str, email: Option<&str>, password: &str) -> Account {
        Account::new(
            User::new(
                format!("id-{}", name),
                name.to_string(),
                email.map(str::to_string),
                0,
                None,
            ),
            password::hash(password).expect("hash"),
        )
    }

    #[test]
    fn names_are_unique_and_case_sensitive() {
        let mut registry = Registry::default();
        assert!(registry.insert(account("steve", None, "pw")).is_ok());
        assert_eq!(
            registry.insert(account("steve", None, "other")),
            Err(AuthError::AlreadyExists)
        );
        assert!(registry.insert(account("Steve", None, "pw")).is_ok());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn finds_by_name_or_email() {
        let mut registry = Registry::default();
        registry
            .insert(account("alex", Some("alex@mail.com"), "secret"))
            .expect("insert");
        assert!(registry.find("alex", "secret").is_some());
        assert!(registry.find("alex@mail.com", "secret").is_some());
        assert!(registry.find("alex", "Secret").is_none());
        assert!(registry.find("nobody", "secret").is_none());
    }

    #[test]
    fn legacy_plaintext_accounts_never_verify() {
        let json = r#"[{"uid":"local_1","ign":"steve","password":"pw","credits":50,"photo":"assets/myskin.png"}]"#;
        let registry = serde_json::from_str::<Registry>(json).expect("legacy registry");
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("steve"));
        assert!(registry.find("steve", "pw").is_none());
    }

    #[test]
    fn nameless_legacy_account_reserves_nothing() {
        let json = r#"[{"uid":"local_2","ign":"","password":"pw","credits":50}]"#;
        let mut registry = serde_json::from_str::<Registry>(json).expect("legacy registry");
        assert!(!registry.contains("Player"));
        assert!(registry.insert(account("Player", None, "pw")).is_ok());
        assert!(registry.find("Player", "pw").is_some());
    }
}
