//! Cache Logger Port

use std::sync::Arc;

/// Diagnostic logger used by the cache facade
///
/// All methods are infallible. A logger that discards everything is always
/// available, so callers never need to check whether logging is configured.
pub trait CacheLogger: Send + Sync + std::fmt::Debug {
    fn trace(&self, message: &str);

    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);

    /// Unrecoverable condition; emitted at the highest available severity
    fn fatal(&self, message: &str);

    /// Logger for a named sub-component, sharing this logger's sink
    fn child(&self, component: &str) -> Arc<dyn CacheLogger>;
}

/// Logger that discards everything
///
/// Substituted by the cache facade when no logger is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCacheLogger;

impl NullCacheLogger {
    /// Shared handle usable wherever a logger is required
    pub fn shared() -> Arc<dyn CacheLogger> {
        Arc::new(Self)
    }
}

impl CacheLogger for NullCacheLogger {
    fn trace(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    fn error(&self, _message: &str) {}

    fn fatal(&self, _message: &str) {}

    fn child(&self, _component: &str) -> Arc<dyn CacheLogger> {
        Self::shared()
    }
}
