//! twilio-discovery core
//!
//! Finds Twilio credentials and builds a configured client from them.
//! Sources are checked in priority order:
//! 1. Credentials passed explicitly by the caller
//! 2. `TWILIO_ACCOUNT_SID` and `TWILIO_AUTH_TOKEN`
//! 3. The project named by `TWILIO_PROJECT_ID` in `~/.credentials/twilio.json`
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use twilio_discovery_core::{CredentialDiscovery, DiscoveryOptions, ClientOptions, NoOpLogger};
//!
//! let discovery = CredentialDiscovery::new().with_logger(Arc::new(NoOpLogger::new()));
//! let opts = DiscoveryOptions::new().with_client_options(ClientOptions::new().with_edge("sydney"));
//! let client = discovery.get_client(&opts)?;
//! assert_eq!(client.hostname("api.twilio.com"), "api.sydney.us1.twilio.com");
//! # Ok::<(), twilio_discovery_core::DiscoveryError>(())
//! ```
//!
//! No requests are ever sent; the client only carries validated settings.

pub mod logging;
pub mod secrets;
pub mod config;
pub mod credentials;
pub mod client;
pub mod resolver;

pub use logging::{Logger, LoggerExt, LogLevel, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use secrets::{SecretStore, EnvSecretStore, MemorySecretStore};

pub use credentials::{
    Credentials, CredentialSource, ResolvedCredentials,
    CredentialsFile, CredentialsFileError, ProjectEntry,
};

pub use client::{Client, ClientError, ClientOptions, ClientResult};

pub use resolver::{CredentialDiscovery, DiscoveryOptions, DiscoveryError, DiscoveryResult};
