use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing` events under the `humanizer` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "humanizer", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "humanizer", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "humanizer", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "humanizer", "{}", message);
    }
}
