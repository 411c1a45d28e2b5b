//! Key namespacing
//!
//! Every key sent to the store is prefixed with a two-level namespace:
//! `<system prefix>:<application prefix>:<key>`. Absent or empty segments
//! are skipped, and an empty composite prefix leaves keys untouched.

use crate::constants::{KEY_SEPARATOR, KEY_WILDCARD};
use std::fmt;

/// Join the system and application prefixes into a composite prefix.
///
/// ```
/// use nscache_domain::value_objects::compose;
///
/// assert_eq!(compose(Some("sys"), Some("app")), "sys:app");
/// assert_eq!(compose(None, Some("app")), "app");
/// assert_eq!(compose(Some(""), None), "");
/// ```
pub fn compose(system_prefix: Option<&str>, app_prefix: Option<&str>) -> String {
    [system_prefix, app_prefix]
        .into_iter()
        .flatten()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}

/// Prepend a composite prefix to a caller key.
pub fn with_prefix(composite_prefix: &str, key: &str) -> String {
    if composite_prefix.is_empty() {
        key.to_string()
    } else {
        format!("{composite_prefix}{KEY_SEPARATOR}{key}")
    }
}

/// Composite prefix fixed at construction time
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPrefix(String);

impl KeyPrefix {
    /// Build the composite prefix from its two segments
    pub fn new(system_prefix: Option<&str>, app_prefix: Option<&str>) -> Self {
        Self(compose(system_prefix, app_prefix))
    }

    /// Namespaced key for a caller key
    pub fn key(&self, key: &str) -> String {
        with_prefix(&self.0, key)
    }

    /// Glob pattern matching every key in this namespace
    pub fn search_pattern(&self) -> String {
        self.key(KEY_WILDCARD)
    }

    /// The composite prefix itself
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
