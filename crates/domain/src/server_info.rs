//! Parser for the line-oriented text returned by `INFO`:
//!
//! ```text
//! # Memory
//! used_memory:1024
//! used_memory_human:1.00K
//! ```

use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_SECTION: &str = "default";
const SECTION_MARKER: char = '#';

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InfoValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl InfoValue {
    fn coerce(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            return InfoValue::Integer(n);
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => InfoValue::Float(f),
            _ => InfoValue::Text(raw.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            InfoValue::Integer(n) => Some(n as f64),
            InfoValue::Float(f) => Some(f),
            InfoValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            InfoValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

pub type InfoSection = BTreeMap<String, InfoValue>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ServerInfo {
    sections: BTreeMap<String, InfoSection>,
}

impl ServerInfo {
    /// Never fails; lines without a key/value shape are dropped.
    pub fn parse(text: &str) -> Self {
        let mut sections: BTreeMap<String, InfoSection> = BTreeMap::new();
        let mut current = DEFAULT_SECTION.to_string();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(name) = line.strip_prefix(SECTION_MARKER) {
                current = name.trim().to_string();
                sections.entry(current.clone()).or_default();
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            sections
                .entry(current.clone())
                .or_default()
                .insert(key.to_string(), InfoValue::coerce(value.trim()));
        }

        Self { sections }
    }

    pub fn section(&self, name: &str) -> Option<&InfoSection> {
        self.sections.get(name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&InfoValue> {
        self.sections.get(section)?.get(key)
    }

    pub fn sections(&self) -> &BTreeMap<String, InfoSection> {
        &self.sections
    }

    pub fn into_sections(self) -> BTreeMap<String, InfoSection> {
        self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
