//! Priority-ordered credential discovery

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::client::{Client, ClientOptions};
use crate::config::{default_credentials_path, ENV_ACCOUNT_SID, ENV_AUTH_TOKEN, ENV_PROJECT_ID};
use crate::credentials::{
    CredentialSource, Credentials, CredentialsFile, CredentialsFileError, ResolvedCredentials,
};
use crate::logging::{ConsoleLogger, LoggerExt, SharedLogger};
use crate::secrets::{EnvSecretStore, SecretStore};

use super::error::{DiscoveryError, DiscoveryResult};

static DEFAULT_LOGGER: Lazy<SharedLogger> = Lazy::new(|| Arc::new(ConsoleLogger::new()));

/// What the caller passes to discovery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Explicit credentials; when set, no other source is consulted
    pub credentials: Option<Credentials>,
    /// Options forwarded to the client
    pub options: Option<ClientOptions>,
}

impl DiscoveryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_client_options(mut self, options: ClientOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Finds Twilio credentials and builds a client from them
///
/// Sources are checked in a fixed order and the first applicable one wins.
/// A source is applicable as soon as any part of it is present, so a
/// half-configured source is an error rather than a reason to fall through.
///
/// # Example
///
/// ```no_run
/// use twilio_discovery_core::resolver::{CredentialDiscovery, DiscoveryOptions};
///
/// let discovery = CredentialDiscovery::new();
/// let client = discovery.get_client(&DiscoveryOptions::new()).unwrap();
/// println!("acting on {}", client.account_sid());
/// ```
pub struct CredentialDiscovery {
    logger: SharedLogger,
    env: Arc<dyn SecretStore>,
    credentials_path: PathBuf,
}

impl CredentialDiscovery {
    /// Discovery over the process environment and `~/.credentials/twilio.json`,
    /// logging to the console at debug level
    pub fn new() -> Self {
        Self {
            logger: Arc::clone(&DEFAULT_LOGGER),
            env: Arc::new(EnvSecretStore::new()),
            credentials_path: default_credentials_path(),
        }
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the source of `TWILIO_*` variables
    pub fn with_env_store(mut self, env: Arc<dyn SecretStore>) -> Self {
        self.env = env;
        self
    }

    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = path.into();
        self
    }

    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    /// Resolve credentials without building a client
    ///
    /// `Ok(None)` means no source applied: nothing explicit, neither
    /// credential variable set, and either no project id, no credentials
    /// file, or no matching project in it.
    pub fn resolve(&self, opts: &DiscoveryOptions) -> DiscoveryResult<Option<ResolvedCredentials>> {
        if let Some(credentials) = &opts.credentials {
            self.logger.debug("Trying opts.credentials");
            if !credentials.is_complete() {
                return Err(self.fail(DiscoveryError::IncompleteOptions));
            }
            return Ok(Some(ResolvedCredentials::new(
                credentials.clone(),
                CredentialSource::Options,
            )));
        }

        let account_sid = self.env.get(ENV_ACCOUNT_SID);
        let auth_token = self.env.get(ENV_AUTH_TOKEN);
        if account_sid.is_some() || auth_token.is_some() {
            self.logger.debug("Trying process environment");
            return match (account_sid, auth_token) {
                (Some(account_sid), Some(auth_token)) => Ok(Some(ResolvedCredentials::new(
                    Credentials::new(account_sid, auth_token),
                    CredentialSource::Environment,
                ))),
                _ => Err(self.fail(DiscoveryError::IncompleteEnvironment)),
            };
        }

        if let Some(project_id) = self.env.get(ENV_PROJECT_ID) {
            if self.credentials_path.exists() {
                self.logger.debug("Trying project ID + credentials file");
                return self.resolve_from_file(&project_id);
            }
        }

        Ok(None)
    }

    fn resolve_from_file(&self, project_id: &str) -> DiscoveryResult<Option<ResolvedCredentials>> {
        let file = CredentialsFile::load(&self.credentials_path).map_err(|e| self.fail_file(e))?;

        let Some(project) = file.find_project(project_id) else {
            self.logger
                .warn_fmt(format_args!("Credentials file has no project with ID '{}'", project_id));
            return Ok(None);
        };

        match project.credentials() {
            Some(credentials) => Ok(Some(ResolvedCredentials::new(
                credentials,
                CredentialSource::CredentialsFile {
                    path: self.credentials_path.clone(),
                    project_id: project_id.to_string(),
                },
            ))),
            None => Err(self.fail(DiscoveryError::IncompleteProject {
                path: self.credentials_path.clone(),
                project_id: project_id.to_string(),
            })),
        }
    }

    /// Resolve credentials and build a client from them
    ///
    /// When nothing resolves, falls back to building the client from the
    /// environment alone, which fails unless the environment changed since
    /// it was checked.
    pub fn get_client(&self, opts: &DiscoveryOptions) -> DiscoveryResult<Client> {
        match self.resolve(opts)? {
            Some(resolved) => {
                crate::log_debug!(self.logger, "Using credentials from {}", resolved.source);
                let options = opts.options.clone().unwrap_or_default();
                Client::with_credentials(&resolved.credentials, options, self.env.as_ref())
                    .map_err(|e| self.fail(e.into()))
            }
            None => {
                self.logger.warn(
                    "Instantiating with no arguments; will likely fail since environment variables were already checked",
                );
                Client::from_env(self.env.as_ref(), ClientOptions::default())
                    .map_err(|e| self.fail(e.into()))
            }
        }
    }

    fn fail(&self, err: DiscoveryError) -> DiscoveryError {
        self.logger.error(&err.to_string());
        err
    }

    fn fail_file(&self, err: CredentialsFileError) -> DiscoveryError {
        match &err {
            CredentialsFileError::InvalidJson { source, .. } => {
                self.logger.error_fmt(format_args!("{}: {}", err, source));
            }
            _ => self.logger.error(&err.to_string()),
        }
        err.into()
    }
}

impl Default for CredentialDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CredentialDiscovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialDiscovery")
            .field("env", &self.env.name())
            .field("credentials_path", &self.credentials_path)
            .finish()
    }
}
