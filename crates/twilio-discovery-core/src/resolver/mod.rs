//! Credential discovery
//!
//! Checks sources in priority order:
//! 1. Explicit credentials passed by the caller
//! 2. `TWILIO_ACCOUNT_SID` / `TWILIO_AUTH_TOKEN`
//! 3. `TWILIO_PROJECT_ID` + `~/.credentials/twilio.json`

mod error;
mod discovery;

pub use error::{DiscoveryError, DiscoveryResult};
pub use discovery::{CredentialDiscovery, DiscoveryOptions};
