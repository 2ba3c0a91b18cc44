use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Bridges the business Logger port onto the tracing subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "api", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "api", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "api", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "api", "{}", message);
    }
}
