//! Named-logger registry

use super::logger::Logger;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Name → logger mapping shared by all dispatch entry points.
///
/// The registry holds one share of every registered logger; removing a name
/// releases that share only, so references held elsewhere stay valid. The
/// map carries no observable iteration order and consumers must not assume
/// one. Mutation is serialized against dispatch iteration by the inner lock.
///
/// The daemon constructs a single registry at startup, wires its sinks
/// through [`add_logger`](Self::add_logger), and tears them down with
/// [`remove_logger`](Self::remove_logger) at shutdown.
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `logger` under `name`, replacing any previous mapping for
    /// that name.
    pub fn add_logger(&self, name: impl Into<String>, logger: Arc<Logger>) {
        self.loggers.write().insert(name.into(), logger);
    }

    /// Remove the entry for `name`. Returns whether an entry existed;
    /// absence is reported, not treated as an error.
    pub fn remove_logger(&self, name: &str) -> bool {
        self.loggers.write().remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Clone out the current set of loggers, in no particular order.
    ///
    /// Dispatch iterates over this snapshot so registry mutation never races
    /// an in-flight broadcast.
    pub fn snapshot(&self) -> Vec<Arc<Logger>> {
        self.loggers.read().values().cloned().collect()
    }
}
