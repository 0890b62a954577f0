//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::Write;

/// Which console stream a [`ConsoleSink`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

/// Sink writing log lines to the process console.
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    /// Write to stderr instead of stdout. Typical for an error logger wired
    /// alongside the operational console logger.
    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", line)?;
            }
            ConsoleStream::Stderr => {
                let stderr = std::io::stderr();
                let mut handle = stderr.lock();
                writeln!(handle, "{}", line)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().flush()?,
            ConsoleStream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "console",
            ConsoleStream::Stderr => "console-stderr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_does_not_fail() {
        let mut sink = ConsoleSink::new();
        sink.write_line("console sink test line").expect("write");
        sink.flush().expect("flush");
    }

    #[test]
    fn test_names() {
        assert_eq!(ConsoleSink::new().name(), "console");
        assert_eq!(ConsoleSink::stderr().name(), "console-stderr");
    }
}
