//! Ports consumed by the cache facade
//!
//! | Port | Purpose |
//! |------|---------|
//! | [`KeyValueClient`] | Commands against the external key-value store |
//! | [`CacheLogger`] | Diagnostic output, with child loggers per component |
//! | [`NullCacheLogger`] | Discards all diagnostics |

pub mod key_value;
pub mod logger;

pub use key_value::KeyValueClient;
pub use logger::{CacheLogger, NullCacheLogger};
