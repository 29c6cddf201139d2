use std::collections::BTreeMap;

pub const TYPE_NONE: &str = "none";
pub const TYPE_STRING: &str = "string";
pub const TYPE_HASH: &str = "hash";
pub const TYPE_LIST: &str = "list";
pub const TYPE_SET: &str = "set";
pub const TYPE_ZSET: &str = "zset";

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMember {
    pub member: String,
    pub score: f64,
}

/// Value of a key, shaped by its type.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyValue {
    String(String),
    Hash(BTreeMap<String, String>),
    List(Vec<String>),
    Set(Vec<String>),
    SortedSet(Vec<ScoredMember>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyInspection {
    pub key: String,
    pub key_type: String,
    /// `None` for absent keys and for types without a readable shape
    pub value: Option<KeyValue>,
}

impl KeyInspection {
    pub fn absent(key: &str) -> Self {
        Self {
            key: key.to_string(),
            key_type: TYPE_NONE.to_string(),
            value: None,
        }
    }
}
