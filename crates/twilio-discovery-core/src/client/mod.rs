//! Configured Twilio client
//!
//! A `Client` is the validated result of discovery: credentials plus the
//! options that shape how requests would be addressed. It performs no I/O.

mod error;
mod options;
mod instance;

pub use error::{ClientError, ClientResult};
pub use options::ClientOptions;
pub use instance::Client;
