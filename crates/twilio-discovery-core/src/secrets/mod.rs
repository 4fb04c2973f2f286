//! Sources of raw secret values
//!
//! Discovery reads `TWILIO_*` variables through the `SecretStore` trait so
//! the process environment can be swapped for an in-memory map.
//! - `EnvSecretStore` reads the process environment
//! - `MemorySecretStore` holds values in memory

mod traits;
mod env_store;
mod memory_store;

pub use traits::SecretStore;
pub use env_store::EnvSecretStore;
pub use memory_store::MemorySecretStore;
