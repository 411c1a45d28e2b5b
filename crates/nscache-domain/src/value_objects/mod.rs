//! Value objects for the namespaced cache

pub mod key_prefix;
pub mod reply;
pub mod results;

pub use key_prefix::{KeyPrefix, compose, with_prefix};
pub use reply::CommandReply;
pub use results::{KeyCount, KeysDeleted};
