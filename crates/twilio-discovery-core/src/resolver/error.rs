//! Discovery error types

use std::path::PathBuf;

use thiserror::Error;

use crate::client::ClientError;
use crate::credentials::CredentialsFileError;

/// Errors that can occur while discovering credentials or building a client
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Explicit credentials were given but one of the values is empty
    #[error("'options.credentials' is missing 'accountSid' and/or 'authToken'")]
    IncompleteOptions,

    /// Only one of the two credential environment variables is set
    #[error("One environment variable is missing: 'TWILIO_ACCOUNT_SID' or 'TWILIO_AUTH_TOKEN'")]
    IncompleteEnvironment,

    #[error(transparent)]
    CredentialsFile(#[from] CredentialsFileError),

    /// The selected project exists but lacks a credential value
    #[error(
        "Credentials file '{}' contains project '{project_id}', but is missing 'accountSid' and/or 'authToken'",
        .path.display()
    )]
    IncompleteProject { path: PathBuf, project_id: String },

    #[error("Failed to construct client: {0}")]
    Client(#[from] ClientError),
}

pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
