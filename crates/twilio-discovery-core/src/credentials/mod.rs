//! Credential types and the multi-project credentials file

mod types;
mod file;

pub use types::{Credentials, CredentialSource, ResolvedCredentials};
pub use file::{CredentialsFile, CredentialsFileError, CredentialsFileResult, ProjectEntry};
