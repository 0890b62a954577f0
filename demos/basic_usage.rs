//! Basic usage example
//!
//! Demonstrates wiring a console logger into the registry and dispatching
//! template-formatted messages at different severities.
//!
//! Run with: cargo run --example basic_usage

use proxylog::prelude::*;
use proxylog::{debug, info, verbose, warning};
use std::sync::Arc;

fn main() {
    // The daemon builds one registry at startup and wires its sinks.
    let registry = Arc::new(LoggerRegistry::new());
    registry.add_logger(
        "console",
        Arc::new(Logger::new(ConsoleSink::new()).with_name("console")),
    );

    let log = Dispatcher::new(Arc::clone(&registry));

    // Positional template formatting.
    info!(log, "listening on %s:%d", "0.0.0.0", 1080u16);
    info!(log, "session %x established (%d active)", 0xbeefu32, 3);
    warning!(log, "upstream %s slow, %dms round trip", "relay-2", 740);

    // Below the default INFO threshold, so these are dropped.
    verbose!(log, "selector tick");
    debug!(log, "buffer watermark %d", 512);

    // Lower the threshold at runtime and they come through.
    registry
        .get("console")
        .expect("registered above")
        .set_level(Severity::Verbose);
    debug!(log, "buffer watermark %d", 512);

    // The rendered message is returned for reuse.
    let message = proxylog::log!(log, Severity::Error, "refused %d connection%s", 2, "s");
    println!("reported: {}", message);
}
