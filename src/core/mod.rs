//! Core logging types and traits

pub mod dispatcher;
pub mod error;
pub mod format;
pub mod logger;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use dispatcher::{Dispatcher, ExitHandler, EMERGENCY_EXIT_CODE};
pub use error::{LogError, Result};
pub use format::{render, FormatArg};
pub use logger::Logger;
pub use registry::LoggerRegistry;
pub use severity::Severity;
pub use sink::Sink;
pub use timestamp::{TimestampFormat, HUMAN_PATTERN};
