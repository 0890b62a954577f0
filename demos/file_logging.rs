//! File logging example
//!
//! Demonstrates broadcasting to a console logger and a file logger with
//! independent thresholds and timestamp formats, plus registry teardown.
//!
//! Run with: cargo run --example file_logging

use proxylog::prelude::*;
use proxylog::{error, info, verbose};
use std::sync::Arc;

fn main() -> Result<()> {
    let registry = Arc::new(LoggerRegistry::new());

    // Operational console output, INFO and up.
    registry.add_logger(
        "console",
        Arc::new(Logger::new(ConsoleSink::new()).with_name("console")),
    );

    // Everything, including VERBOSE, goes to the file with ISO timestamps.
    let log_path = std::env::temp_dir().join("proxylog_demo.log");
    registry.add_logger(
        "file",
        Arc::new(
            Logger::new(FileSink::new(&log_path)?)
                .with_name("file")
                .with_threshold(Severity::Verbose)
                .with_timestamp_format(TimestampFormat::Iso8601),
        ),
    );

    let log = Dispatcher::new(Arc::clone(&registry));

    info!(log, "daemon started, logging to %s", log_path.display().to_string());
    verbose!(log, "this line reaches only the file");
    error!(log, "upstream handshake failed with code %x", 0x20u8);

    // Shutdown: flush and unwire the file logger.
    if let Some(file_logger) = registry.get("file") {
        file_logger.flush()?;
    }
    registry.remove_logger("file");
    info!(log, "file logger detached");

    Ok(())
}
