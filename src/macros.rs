//! Dispatch macros for ergonomic logging.
//!
//! These macros wrap the [`Dispatcher`](crate::Dispatcher) entry points and
//! convert each argument through [`FormatArg::from`](crate::FormatArg), so
//! call sites can pass plain values next to a positional `%` template.
//!
//! # Examples
//!
//! ```
//! use proxylog::prelude::*;
//! use proxylog::info;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(LoggerRegistry::new());
//! let log = Dispatcher::new(registry);
//!
//! // Basic logging
//! info!(log, "Server started");
//!
//! // With positional arguments
//! let port = 1080;
//! info!(log, "Server listening on port %d", port);
//! ```

/// Log at an explicit severity; evaluates to the rendered message.
///
/// # Examples
///
/// ```
/// # use proxylog::prelude::*;
/// # use std::sync::Arc;
/// # let dispatcher = Dispatcher::new(Arc::new(LoggerRegistry::new()));
/// use proxylog::log;
/// let message = log!(dispatcher, Severity::Error, "error code: %d", 500);
/// assert_eq!(message, "error code: 500");
/// ```
#[macro_export]
macro_rules! log {
    ($dispatcher:expr, $severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $dispatcher.log($severity, $template, &[$($crate::FormatArg::from($arg)),*])
    };
}

/// Log a verbose-level message.
#[macro_export]
macro_rules! verbose {
    ($dispatcher:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $dispatcher.verbose($template, &[$($crate::FormatArg::from($arg)),*])
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use proxylog::prelude::*;
/// # use std::sync::Arc;
/// # let dispatcher = Dispatcher::new(Arc::new(LoggerRegistry::new()));
/// use proxylog::debug;
/// debug!(dispatcher, "selector woke with %d events", 3);
/// ```
#[macro_export]
macro_rules! debug {
    ($dispatcher:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $dispatcher.debug($template, &[$($crate::FormatArg::from($arg)),*])
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use proxylog::prelude::*;
/// # use std::sync::Arc;
/// # let dispatcher = Dispatcher::new(Arc::new(LoggerRegistry::new()));
/// use proxylog::info;
/// info!(dispatcher, "session %x established", 0xdeadu32);
/// ```
#[macro_export]
macro_rules! info {
    ($dispatcher:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $dispatcher.info($template, &[$($crate::FormatArg::from($arg)),*])
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($dispatcher:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $dispatcher.warning($template, &[$($crate::FormatArg::from($arg)),*])
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($dispatcher:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $dispatcher.error($template, &[$($crate::FormatArg::from($arg)),*])
    };
}

/// Log an emergency-level message and terminate the process.
///
/// # Examples
///
/// ```no_run
/// # use proxylog::prelude::*;
/// # use std::sync::Arc;
/// # let dispatcher = Dispatcher::new(Arc::new(LoggerRegistry::new()));
/// use proxylog::emergency;
/// emergency!(dispatcher, "cannot bind %s: %s", "0.0.0.0:1080", "address in use");
/// ```
#[macro_export]
macro_rules! emergency {
    ($dispatcher:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $dispatcher.emergency($template, &[$($crate::FormatArg::from($arg)),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Dispatcher, LoggerRegistry, Severity};
    use std::sync::Arc;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(LoggerRegistry::new()))
    }

    #[test]
    fn test_log_macro_returns_message() {
        let log = dispatcher();
        assert_eq!(log!(log, Severity::Info, "plain"), "plain");
        assert_eq!(log!(log, Severity::Info, "%d%%", 50), "50%");
    }

    #[test]
    fn test_severity_macros() {
        let log = dispatcher();
        verbose!(log, "verbose %s", "detail");
        debug!(log, "debug %d", 1);
        info!(log, "info");
        warning!(log, "warning %d of %d", 1, 3);
        error!(log, "error code %x", 0x80u8);
    }

    #[test]
    fn test_mixed_argument_types() {
        let log = dispatcher();
        let owned = String::from("owned");
        let message = log!(
            log,
            Severity::Debug,
            "%s %s %d %b",
            "borrowed",
            owned,
            -5,
            false,
        );
        assert_eq!(message, "borrowed owned -5 false");
    }
}
