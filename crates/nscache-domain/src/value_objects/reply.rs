//! Store command acknowledgments

use serde::{Deserialize, Serialize};
use std::fmt;

/// Acknowledgment returned by a store or expire command
///
/// Redis answers `SET` with a status line (`OK`) and `EXPIRE` with an
/// integer (`1` when the timeout was set, `0` when the key is missing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandReply {
    /// Status reply such as `OK`
    Status(String),
    /// Integer reply
    Integer(i64),
}

impl CommandReply {
    /// The conventional `OK` status reply
    pub fn ok() -> Self {
        Self::Status("OK".to_string())
    }
}

impl fmt::Display for CommandReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status) => f.write_str(status),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}
