//! `tracing`-backed cache logger
//!
//! Every event carries a `component` field naming the emitting logger;
//! child loggers extend it with a dot (`nscache.profile`). `fatal` has no
//! tracing level of its own and is emitted at ERROR with `fatal = true`.

use nscache_domain::ports::CacheLogger;
use std::sync::Arc;

/// Default component name for root loggers
pub const DEFAULT_COMPONENT: &str = "nscache";

/// Cache logger emitting `tracing` events
#[derive(Debug, Clone)]
pub struct TracingCacheLogger {
    component: Arc<str>,
}

impl TracingCacheLogger {
    /// Create a root logger for `component`
    pub fn new<S: Into<String>>(component: S) -> Self {
        Self {
            component: Arc::from(component.into()),
        }
    }

    /// Shared handle for the cache facade builder
    pub fn shared<S: Into<String>>(component: S) -> Arc<dyn CacheLogger> {
        Arc::new(Self::new(component))
    }

    pub fn component(&self) -> &str {
        &self.component
    }
}

impl Default for TracingCacheLogger {
    fn default() -> Self {
        Self::new(DEFAULT_COMPONENT)
    }
}

impl CacheLogger for TracingCacheLogger {
    fn trace(&self, message: &str) {
        tracing::trace!(component = %self.component, "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(component = %self.component, "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(component = %self.component, "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(component = %self.component, "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(component = %self.component, "{message}");
    }

    fn fatal(&self, message: &str) {
        tracing::error!(component = %self.component, fatal = true, "{message}");
    }

    fn child(&self, component: &str) -> Arc<dyn CacheLogger> {
        Arc::new(Self::new(format!("{}.{component}", self.component)))
    }
}
