//! # nscache Domain Layer
//!
//! Core types for the namespaced cache facade:
//!
//! - [`value_objects`]: key namespacing and operation result shapes
//! - [`ports`]: contracts for the external key-value client and the diagnostic logger
//! - [`error`]: the shared error type
//!
//! The domain layer has no knowledge of Redis or any other concrete store.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{CacheLogger, KeyValueClient, NullCacheLogger};
pub use value_objects::{CommandReply, KeyCount, KeyPrefix, KeysDeleted};
