//! Logger implementations

pub mod tracing_logger;

pub use tracing_logger::TracingCacheLogger;
