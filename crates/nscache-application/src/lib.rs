//! Application Layer - nscache
//!
//! Hosts [`NamespacedCache`], the facade that namespaces keys, applies
//! expiration and offers bulk enumeration/deletion on top of any
//! [`KeyValueClient`](nscache_domain::ports::KeyValueClient).
//!
//! This crate depends only on `nscache-domain`; concrete clients and
//! loggers are supplied by the caller.

pub mod cache;

pub use cache::{NamespacedCache, NamespacedCacheBuilder, create};
