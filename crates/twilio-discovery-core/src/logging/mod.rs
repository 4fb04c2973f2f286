//! Logging abstractions used during credential discovery
//!
//! Discovery never prints on its own: every message goes through a
//! [`Logger`], so host applications can route output wherever they like.

mod traits;
mod noop;
mod console;
mod memory;

pub use traits::{Logger, LoggerExt, LogLevel, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::MemoryLogger;
