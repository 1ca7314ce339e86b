use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under the `stock_query` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "stock_query", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "stock_query", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "stock_query", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "stock_query", "{}", message);
    }
}
