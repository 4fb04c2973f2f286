//! Options accepted when constructing a client

use serde::{Deserialize, Serialize};

/// Client construction options
///
/// Every field is optional. Field names follow the camelCase JSON form so
/// options can be loaded straight from configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    /// Account to act on when it differs from the authenticating account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,
    /// Processing region, e.g. `au1`, `ie1`, `us1`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Edge location, e.g. `sydney`, `dublin`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Extra tokens appended to the user agent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_agent_extensions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_retry: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
    /// Request timeout in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lazy_loading: Option<bool>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_edge(mut self, edge: impl Into<String>) -> Self {
        self.edge = Some(edge.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_user_agent_extension(mut self, extension: impl Into<String>) -> Self {
        self.user_agent_extensions.push(extension.into());
        self
    }

    pub fn with_auto_retry(mut self, auto_retry: bool, max_retries: Option<u32>) -> Self {
        self.auto_retry = Some(auto_retry);
        self.max_retries = max_retries;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_lazy_loading(mut self, lazy: bool) -> Self {
        self.lazy_loading = Some(lazy);
        self
    }

    /// Lazy loading is on unless explicitly disabled
    pub fn lazy_loading(&self) -> bool {
        self.lazy_loading.unwrap_or(true)
    }
}
