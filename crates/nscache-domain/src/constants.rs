//! Domain constants

/// Separator placed between prefix segments and the caller key
pub const KEY_SEPARATOR: &str = ":";

/// Glob wildcard matching every key under a prefix
pub const KEY_WILDCARD: &str = "*";
