//! Environment variable secret store

use std::env;

use super::traits::SecretStore;

/// Secret store that reads from environment variables
///
/// Read-only. A variable that is set to the empty string is treated the same
/// as one that is not set at all.
///
/// # Example
///
/// ```
/// use twilio_discovery_core::secrets::{SecretStore, EnvSecretStore};
///
/// let store = EnvSecretStore::new();
/// let sid = store.get("TWILIO_ACCOUNT_SID");
/// ```
#[derive(Debug, Default)]
pub struct EnvSecretStore {
    _private: (),
}

impl EnvSecretStore {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}
