use super::*;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// In-process [`Storage`]. Clones share the same entries, like handles
/// to the browser's storage area.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Storage that rejects writes once keys and values exceed `bytes` in total.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Rc::default(),
            quota: Some(bytes),
        }
    }
    fn size(entries: &BTreeMap<String, String>) -> usize {
        entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.borrow_mut();
        if let Some(quota) = self.quota {
            let current = entries.get(key).map_or(0, |v| key.len() + v.len());
            let needed = Self::size(&entries) - current + key.len() + value.len();
            if needed > quota {
                return Err(StorageError(format!(
                    "quota exceeded: {} of {} bytes",
                    needed, quota
                )));
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let a = MemoryStorage::default();
        let b = a.clone();
        a.set("k", "v").expect("set");
        assert_eq!(b.get("k"), Ok(Some("v".to_string())));
        b.remove("k").expect("remove");
        assert_eq!(a.get("k"), Ok(None));
    }

    #[test]
    fn quota_rejects_oversized_writes() {
        let storage = MemoryStorage::with_quota(8);
        assert!(storage.set("k", "1234567").is_ok());
        assert!(storage.set("k", "12345678").is_err());
        assert_eq!(storage.get("k"), Ok(Some("1234567".to_string())));
    }
}
