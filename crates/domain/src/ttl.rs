use serde::{Serialize, Serializer};
use std::fmt;

/// Remaining lifetime of a key as reported by the store's TTL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// The key has no expiration (store reply `-1`).
    Persist,
    /// Any other reply, passed through unchanged.
    Seconds(i64),
}

impl Ttl {
    pub const PERSIST_REPLY: i64 = -1;
    pub const PERSIST_LABEL: &'static str = "PERSIST";

    pub fn from_reply(reply: i64) -> Self {
        if reply == Self::PERSIST_REPLY {
            Ttl::Persist
        } else {
            Ttl::Seconds(reply)
        }
    }

    /// Seconds left, when the reply is a non-negative countdown.
    pub fn remaining_secs(&self) -> Option<i64> {
        match *self {
            Ttl::Seconds(secs) if secs >= 0 => Some(secs),
            _ => None,
        }
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ttl::Persist => f.write_str(Self::PERSIST_LABEL),
            Ttl::Seconds(secs) => write!(f, "{}", secs),
        }
    }
}

impl Serialize for Ttl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Ttl::Persist => serializer.serialize_str(Self::PERSIST_LABEL),
            Ttl::Seconds(secs) => serializer.serialize_i64(secs),
        }
    }
}
