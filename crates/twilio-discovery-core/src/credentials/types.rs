//! Credential value types

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// An account SID / auth token pair
///
/// Empty fields count as missing; see [`Credentials::is_complete`].
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default)]
    pub account_sid: String,
    #[serde(default)]
    pub auth_token: String,
}

impl Credentials {
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Both the account SID and the auth token are non-empty
    pub fn is_complete(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty()
    }

    /// Display-safe form of the auth token
    pub fn masked_token(&self) -> String {
        mask_secret(&self.auth_token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &self.masked_token())
            .finish()
    }
}

/// Keep the first and last 4 characters of long secrets, star everything else
pub(crate) fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let len = chars.len();
    if len <= 12 {
        return "*".repeat(len);
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[len - 4..].iter().collect();
    format!("{}{}{}", prefix, "*".repeat(len - 8), suffix)
}

/// Where a set of credentials was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Passed explicitly by the caller
    Options,
    /// `TWILIO_ACCOUNT_SID` / `TWILIO_AUTH_TOKEN`
    Environment,
    /// A project entry in the credentials file
    CredentialsFile { path: PathBuf, project_id: String },
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Options => write!(f, "explicit options"),
            CredentialSource::Environment => write!(f, "environment variables"),
            CredentialSource::CredentialsFile { path, project_id } => {
                write!(f, "project '{}' in '{}'", project_id, path.display())
            }
        }
    }
}

/// Result of credential discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub credentials: Credentials,
    pub source: CredentialSource,
}

impl ResolvedCredentials {
    pub fn new(credentials: Credentials, source: CredentialSource) -> Self {
        Self { credentials, source }
    }
}
