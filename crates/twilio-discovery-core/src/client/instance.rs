//! Client construction and request addressing

use std::fmt;

use crate::config::{ENV_ACCOUNT_SID, ENV_AUTH_TOKEN, ENV_EDGE, ENV_LOG_LEVEL, ENV_REGION};
use crate::credentials::Credentials;
use crate::secrets::SecretStore;

use super::error::{ClientError, ClientResult};
use super::options::ClientOptions;

/// Region used when only an edge is configured
const DEFAULT_REGION: &str = "us1";

/// A validated, configured Twilio client
///
/// The username authenticates requests; the account SID selects the
/// account they act on. They differ only when `ClientOptions::account_sid`
/// is set (e.g. a subaccount).
///
/// # Example
///
/// ```
/// use twilio_discovery_core::client::{Client, ClientOptions};
///
/// let client = Client::new("AC123", "token", ClientOptions::new().with_edge("sydney")).unwrap();
/// assert_eq!(client.hostname("api.twilio.com"), "api.sydney.us1.twilio.com");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Client {
    username: String,
    password: String,
    account_sid: String,
    region: Option<String>,
    edge: Option<String>,
    log_level: Option<String>,
    options: ClientOptions,
}

impl Client {
    /// Build a client from explicit credentials only
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        options: ClientOptions,
    ) -> ClientResult<Self> {
        Self::assemble(username.into(), password.into(), options, None)
    }

    /// Build a client from explicit credentials, with region, edge and log
    /// level falling back to the environment when the options leave them unset
    pub fn with_credentials(
        credentials: &Credentials,
        options: ClientOptions,
        env: &dyn SecretStore,
    ) -> ClientResult<Self> {
        Self::assemble(
            credentials.account_sid.clone(),
            credentials.auth_token.clone(),
            options,
            Some(env),
        )
    }

    /// Build a client entirely from `TWILIO_*` environment variables
    pub fn from_env(env: &dyn SecretStore, options: ClientOptions) -> ClientResult<Self> {
        let username = env.get(ENV_ACCOUNT_SID).unwrap_or_default();
        let password = env.get(ENV_AUTH_TOKEN).unwrap_or_default();
        Self::assemble(username, password, options, Some(env))
    }

    fn assemble(
        username: String,
        password: String,
        options: ClientOptions,
        env: Option<&dyn SecretStore>,
    ) -> ClientResult<Self> {
        if username.is_empty() {
            return Err(ClientError::MissingUsername);
        }
        if password.is_empty() {
            return Err(ClientError::MissingPassword);
        }

        let account_sid = options
            .account_sid
            .clone()
            .filter(|sid| !sid.is_empty())
            .unwrap_or_else(|| username.clone());
        if !account_sid.starts_with("AC") {
            return Err(ClientError::InvalidAccountSid { account_sid });
        }

        let from_env = |key: &str| env.and_then(|store| store.get(key));
        let region = non_empty(options.region.clone()).or_else(|| from_env(ENV_REGION));
        let edge = non_empty(options.edge.clone()).or_else(|| from_env(ENV_EDGE));
        let log_level = non_empty(options.log_level.clone()).or_else(|| from_env(ENV_LOG_LEVEL));

        Ok(Self {
            username,
            password,
            account_sid,
            region,
            edge,
            log_level,
            options,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn edge(&self) -> Option<&str> {
        self.edge.as_deref()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// User agent string, including any configured extensions
    pub fn user_agent(&self) -> String {
        let mut parts = vec![
            format!("twilio-discovery/{}", env!("CARGO_PKG_VERSION")),
            format!("({} {})", std::env::consts::OS, std::env::consts::ARCH),
        ];
        parts.extend(self.options.user_agent_extensions.iter().cloned());
        parts.join(" ")
    }

    /// Rewrite a base API host for this client's region and edge
    ///
    /// `product.twilio.com` becomes `product[.edge][.region].twilio.com`.
    /// A host that already carries a region (`api.au1.twilio.com`) or edge
    /// and region (`api.sydney.au1.twilio.com`) keeps them unless the client
    /// overrides them. An edge with no region implies `us1`. Hosts with
    /// fewer than three labels are returned unchanged.
    pub fn hostname(&self, base_host: &str) -> String {
        let pieces: Vec<&str> = base_host.split('.').collect();
        if pieces.len() < 3 {
            return base_host.to_string();
        }

        let product = pieces[0];
        let domain = pieces[pieces.len() - 2..].join(".");
        let (host_edge, host_region) = match pieces.len() {
            4 => (None, Some(pieces[1])),
            5 => (Some(pieces[1]), Some(pieces[2])),
            _ => (None, None),
        };

        let edge = self.edge.as_deref().or(host_edge);
        let region = self
            .region
            .as_deref()
            .or(host_region)
            .or(edge.map(|_| DEFAULT_REGION));

        [Some(product), edge, region, Some(domain.as_str())]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(".")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("account_sid", &self.account_sid)
            .field("region", &self.region)
            .field("edge", &self.edge)
            .field("log_level", &self.log_level)
            .finish()
    }
}
