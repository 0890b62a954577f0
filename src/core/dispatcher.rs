//! Level-keyed dispatch and broadcast delivery

use super::{
    format::{render, FormatArg},
    registry::LoggerRegistry,
    severity::Severity,
};
use std::sync::Arc;

/// Exit status used when an EMERGENCY dispatch terminates the process.
pub const EMERGENCY_EXIT_CODE: i32 = 1;

/// Handler invoked after an EMERGENCY broadcast completes.
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

/// The level-keyed entry points of the logging subsystem.
///
/// Each entry point renders the message once and broadcasts it synchronously
/// to every registered logger whose threshold admits the severity. There is
/// no buffering, no retry, and no asynchronous delivery: a dispatch completes
/// before the call returns.
///
/// **Fatal escalation**: [`emergency`](Self::emergency) (and
/// [`log`](Self::log) called with [`Severity::Emergency`]) terminates the
/// process with [`EMERGENCY_EXIT_CODE`] after the broadcast attempt, whether
/// or not any logger accepted the message. The termination goes through the
/// exit handler, `std::process::exit` by default; tests substitute their own
/// via [`with_exit_handler`](Self::with_exit_handler).
pub struct Dispatcher {
    registry: Arc<LoggerRegistry>,
    on_emergency: ExitHandler,
}

impl Dispatcher {
    pub fn new(registry: Arc<LoggerRegistry>) -> Self {
        Self {
            registry,
            on_emergency: Arc::new(|code| std::process::exit(code)),
        }
    }

    /// Replace the process-termination handler for EMERGENCY dispatches.
    #[must_use]
    pub fn with_exit_handler(mut self, handler: ExitHandler) -> Self {
        self.on_emergency = handler;
        self
    }

    pub fn registry(&self) -> &Arc<LoggerRegistry> {
        &self.registry
    }

    /// Render once, broadcast, and return the rendered message so callers
    /// can reuse the text (in a response, an error value, …).
    ///
    /// For [`Severity::Emergency`] the exit handler runs after the broadcast
    /// attempt, unconditionally.
    pub fn log(&self, severity: Severity, template: &str, args: &[FormatArg]) -> String {
        let message = render(template, args);
        self.broadcast(severity, &message);

        if severity == Severity::Emergency {
            (self.on_emergency)(EMERGENCY_EXIT_CODE);
        }

        message
    }

    /// Deliver one rendered message to every logger whose threshold admits
    /// `severity`. A failing sink is reported to stderr and never blocks or
    /// skips delivery to the remaining loggers.
    fn broadcast(&self, severity: Severity, message: &str) {
        for logger in self.registry.snapshot() {
            if let Err(e) = logger.write(severity, message) {
                eprintln!(
                    "[LOGGER ERROR] Logger '{}' failed to write: {}",
                    logger.name(),
                    e
                );
            }
        }
    }

    pub fn verbose(&self, template: &str, args: &[FormatArg]) {
        self.log(Severity::Verbose, template, args);
    }

    pub fn debug(&self, template: &str, args: &[FormatArg]) {
        self.log(Severity::Debug, template, args);
    }

    pub fn info(&self, template: &str, args: &[FormatArg]) {
        self.log(Severity::Info, template, args);
    }

    pub fn warning(&self, template: &str, args: &[FormatArg]) {
        self.log(Severity::Warning, template, args);
    }

    pub fn error(&self, template: &str, args: &[FormatArg]) {
        self.log(Severity::Error, template, args);
    }

    /// Report an unrecoverable condition and terminate the process.
    ///
    /// The broadcast attempt completes first; termination then happens even
    /// when zero loggers are registered or every threshold filtered the
    /// message out. In-flight dispatches on other threads may be lost.
    pub fn emergency(&self, template: &str, args: &[FormatArg]) {
        self.log(Severity::Emergency, template, args);
    }
}
