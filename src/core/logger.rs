//! Named logger bound to a single sink

use super::{error::Result, severity::Severity, sink::Sink, timestamp::TimestampFormat};
use parking_lot::{Mutex, RwLock};

/// A named, severity-filtered emitter bound to one output sink.
///
/// The sink is supplied at construction and stays with the logger for its
/// lifetime. Threshold and name are mutable in place and take effect for all
/// subsequent dispatches. All state is behind interior locks, so a logger can
/// be shared (`Arc<Logger>`) between the registry and other holders.
pub struct Logger {
    name: RwLock<String>,
    threshold: RwLock<Severity>,
    timestamp_format: TimestampFormat,
    sink: Mutex<Box<dyn Sink>>,
}

impl Logger {
    /// Create a logger writing to `sink`, with the default INFO threshold
    /// and the default human-readable timestamp pattern.
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self {
            name: RwLock::new(String::new()),
            threshold: RwLock::new(Severity::Info),
            timestamp_format: TimestampFormat::default(),
            sink: Mutex::new(Box::new(sink)),
        }
    }

    /// Set the initial severity threshold.
    #[must_use]
    pub fn with_threshold(self, threshold: Severity) -> Self {
        *self.threshold.write() = threshold;
        self
    }

    /// Set the timestamp format used to prefix log lines.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set the logger's own name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        *self.name.write() = name.into();
        self
    }

    pub fn set_level(&self, threshold: Severity) {
        *self.threshold.write() = threshold;
    }

    pub fn level(&self) -> Severity {
        *self.threshold.read()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.write() = name.into();
    }

    pub fn name(&self) -> String {
        self.name.read().clone()
    }

    /// Whether a message at `severity` passes this logger's threshold.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= *self.threshold.read()
    }

    /// Deliver one rendered message at `severity`.
    ///
    /// Composes the full line (timestamp, severity tag, message) and hands it
    /// to the sink as a single write while holding the sink lock, so lines
    /// from concurrent dispatches never interleave. Returns `Ok(false)` when
    /// the threshold filtered the message out.
    pub fn write(&self, severity: Severity, message: &str) -> Result<bool> {
        if !self.enabled(severity) {
            return Ok(false);
        }

        let line = format!(
            "{} [{}] {}",
            self.timestamp_format.now(),
            severity.as_str(),
            message
        );

        let mut sink = self.sink.lock();
        sink.write_line(&line)?;
        Ok(true)
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }
}
