//! Sink trait for log output destinations

use super::error::Result;

/// Destination accepting rendered log lines.
///
/// A sink only needs to accept text and signal success or failure of the
/// write; delivery is never retried by the logging subsystem. `line` arrives
/// without a trailing newline, and each call is one complete log line.
pub trait Sink: Send + Sync {
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
