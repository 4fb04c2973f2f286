//! Core trait for secret lookup

/// Trait for read access to named secrets
///
/// Implementations:
/// - Environment variables (`EnvSecretStore`)
/// - In-memory map (`MemorySecretStore`)
///
/// # Example
///
/// ```
/// use twilio_discovery_core::secrets::{SecretStore, MemorySecretStore};
///
/// let store = MemorySecretStore::new();
/// store.set("TWILIO_PROJECT_ID", "prod");
/// assert_eq!(store.get("TWILIO_PROJECT_ID"), Some("prod".to_string()));
/// ```
pub trait SecretStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Retrieve a secret by key
    ///
    /// Empty values are reported as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Check if a secret exists
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
