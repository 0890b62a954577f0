//! In-memory sink
//!
//! Collects log lines in a shared buffer. Used by the test suite throughout
//! the crate and handy for embedding the subsystem in tools that want to
//! inspect output programmatically.

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared handle to the lines captured by a [`MemorySink`].
pub type LineBuffer = Arc<Mutex<Vec<String>>>;

/// Sink appending each line to a shared in-memory buffer.
#[derive(Default)]
pub struct MemorySink {
    lines: LineBuffer,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the captured lines, valid after the sink moved into a
    /// logger.
    pub fn lines_handle(&self) -> LineBuffer {
        Arc::clone(&self.lines)
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
