//! In-memory secret store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::SecretStore;

/// In-memory secret store
///
/// Stands in for the process environment when the caller wants full control
/// over what discovery sees, e.g. in tests or when embedding.
///
/// # Example
///
/// ```
/// use twilio_discovery_core::secrets::{SecretStore, MemorySecretStore};
///
/// let store = MemorySecretStore::new()
///     .with("TWILIO_ACCOUNT_SID", "AC123")
///     .with("TWILIO_AUTH_TOKEN", "secret");
/// assert!(store.has("TWILIO_AUTH_TOKEN"));
/// ```
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: RwLock<HashMap<String, String>>,
}

impl MemorySecretStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store with initial values
    pub fn with_secrets(initial: HashMap<String, String>) -> Self {
        Self {
            secrets: RwLock::new(initial),
        }
    }

    /// Builder-style insert
    pub fn with(self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: &str, value: &str) {
        self.secrets.write().insert(key.to_string(), value.to_string());
    }

    pub fn remove(&self, key: &str) {
        self.secrets.write().remove(key);
    }

    pub fn clear(&self) {
        self.secrets.write().clear();
    }

    pub fn len(&self) -> usize {
        self.secrets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SecretStore for MemorySecretStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.secrets
            .read()
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
    }
}

impl Clone for MemorySecretStore {
    fn clone(&self) -> Self {
        Self {
            secrets: RwLock::new(self.secrets.read().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_name() {
        let store = MemorySecretStore::new();
        assert_eq!(store.name(), "memory");
    }

    #[test]
    fn test_memory_store_set_and_remove() {
        let store = MemorySecretStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("key"), None);

        store.set("key", "value");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("key"), Some("value".to_string()));

        store.set("key", "new_value");
        assert_eq!(store.get("key"), Some("new_value".to_string()));

        store.remove("key");
        assert!(!store.has("key"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_empty_value_is_absent() {
        let store = MemorySecretStore::new().with("TWILIO_AUTH_TOKEN", "");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("TWILIO_AUTH_TOKEN"), None);
    }

    #[test]
    fn test_memory_store_with_initial() {
        let mut initial = HashMap::new();
        initial.insert("key1".to_string(), "value1".to_string());
        initial.insert("key2".to_string(), "value2".to_string());

        let store = MemorySecretStore::with_secrets(initial);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("key2"), Some("value2".to_string()));

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_clone_is_independent() {
        let store = MemorySecretStore::new().with("key", "value");
        let cloned = store.clone();

        cloned.set("key", "modified");
        assert_eq!(store.get("key"), Some("value".to_string()));
        assert_eq!(cloned.get("key"), Some("modified".to_string()));
    }
}
