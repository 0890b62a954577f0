//! # Proxylog
//!
//! Severity-routed broadcast logging for network proxy daemons.
//!
//! A caller hands a printf-style template plus positional values to one of
//! the level-keyed dispatch entry points; the message is rendered once,
//! tagged with a timestamp and severity, and delivered synchronously to
//! every registered logger whose threshold admits the level. EMERGENCY
//! dispatches terminate the process after the broadcast attempt.
//!
//! ## Features
//!
//! - **Positional templates**: `%` placeholders with one-shot `%x` hex
//!   rendering and graceful argument-exhaustion fallback
//! - **Named loggers**: independent threshold, sink, and timestamp template
//!   per registered logger
//! - **Thread safe**: registry mutation and sink writes are serialized;
//!   lines never interleave
//!
//! ## Example
//!
//! ```
//! use proxylog::prelude::*;
//! use proxylog::sinks::MemorySink;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(LoggerRegistry::new());
//! registry.add_logger("console", Arc::new(Logger::new(MemorySink::new())));
//!
//! let log = Dispatcher::new(Arc::clone(&registry));
//! proxylog::info!(log, "relay accepted connection from %s", "10.0.0.7");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::core::{
        render, Dispatcher, ExitHandler, FormatArg, LogError, Logger, LoggerRegistry, Result,
        Severity, Sink, TimestampFormat, EMERGENCY_EXIT_CODE,
    };
    pub use crate::sinks::MemorySink;
}

#[cfg(feature = "console")]
pub use sinks::ConsoleSink;
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use core::{
    render, Dispatcher, ExitHandler, FormatArg, LogError, Logger, LoggerRegistry, Result,
    Severity, Sink, TimestampFormat, EMERGENCY_EXIT_CODE,
};
pub use sinks::MemorySink;
