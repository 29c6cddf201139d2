//! Codec for the Drupal cache-key grammar:
//! `{prefix}:{bin}:{cid}[label]=value][label]=value]...`
//!
//! Real sites also write the colon-separated form
//! `{prefix}:{bin}:{cid}:[label]=value:[label]=value`; both decode the same way.
//! A context value ends at `][`, at `:[`, at a closing `]` at end of key, or at
//! end of key. Values that themselves contain `][` or `:[` are truncated there.

use crate::ttl::Ttl;

pub const UNKNOWN_BIN: &str = "unknown";
pub const DYNAMIC_PAGE_CACHE_BIN: &str = "dynamic_page_cache";

pub mod labels {
    pub const ROUTE: &str = "route";
    pub const THEME: &str = "theme";
    pub const URL: &str = "url";
    pub const URL_PATH: &str = "url.path";
    pub const LANGUAGE_CONTENT: &str = "languages:language_content";
    pub const LANGUAGE_INTERFACE: &str = "languages:language_interface";
    pub const ROLE_ANONYMOUS: &str = "user.roles:anonymous";
    pub const ROLE_AUTHENTICATED: &str = "user.roles:authenticated";
}

/// Ordered `(label, value)` pairs from the bracketed suffix of a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextParams<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> ContextParams<'a> {
    pub fn parse(key: &'a str) -> Self {
        let mut pairs = Vec::new();
        let mut rest = match key.find('[') {
            Some(idx) => &key[idx..],
            None => return Self { pairs },
        };

        while let Some(body) = rest.strip_prefix('[') {
            let Some(close) = body.find(']') else {
                break;
            };
            let label = &body[..close];
            let tail = &body[close..];

            let next = match tail.strip_prefix("]=") {
                Some(after) if !label.contains('[') => {
                    let (value, next) = split_value(after);
                    pairs.push((label, value));
                    next
                }
                _ => tail,
            };

            match next.find('[') {
                Some(idx) => rest = &next[idx..],
                None => break,
            }
        }

        Self { pairs }
    }

    /// Value of the first occurrence of `label`.
    pub fn get(&self, label: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| *v)
    }

    /// Only the literal string `"true"` counts as set.
    pub fn flag(&self, label: &str) -> bool {
        self.get(label) == Some("true")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn split_value(input: &str) -> (&str, &str) {
    let bytes = input.as_bytes();
    for i in 0..bytes.len() {
        match bytes[i] {
            b']' if i + 1 == bytes.len() => return (&input[..i], ""),
            b']' | b':' if bytes.get(i + 1) == Some(&b'[') => {
                return (&input[..i], &input[i + 1..]);
            }
            _ => {}
        }
    }
    (input, "")
}

/// One decoded cache key plus whatever per-key facts were fetched for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKeyRow<'a> {
    pub key: &'a str,
    pub bin: &'a str,
    pub bytes: Option<u64>,
    pub ttl: Option<Ttl>,
    pub route: Option<&'a str>,
    pub url: Option<&'a str>,
    pub theme: Option<&'a str>,
    pub lang_content: Option<&'a str>,
    pub lang_interface: Option<&'a str>,
    pub is_anon: bool,
    pub is_auth: bool,
}

impl<'a> CacheKeyRow<'a> {
    pub fn with_ttl(mut self, ttl: Option<Ttl>) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_bytes(mut self, bytes: Option<u64>) -> Self {
        self.bytes = bytes;
        self
    }
}

/// Decodes a namespaced key. Never fails: missing pieces become `None` or
/// the `"unknown"` bin.
pub fn decode(key: &str) -> CacheKeyRow<'_> {
    let bin = key
        .split(':')
        .nth(1)
        .filter(|b| !b.is_empty())
        .unwrap_or(UNKNOWN_BIN);
    let ctx = ContextParams::parse(key);

    CacheKeyRow {
        key,
        bin,
        bytes: None,
        ttl: None,
        route: ctx.get(labels::ROUTE),
        url: ctx.get(labels::URL_PATH).or_else(|| ctx.get(labels::URL)),
        theme: ctx.get(labels::THEME),
        lang_content: ctx.get(labels::LANGUAGE_CONTENT),
        lang_interface: ctx.get(labels::LANGUAGE_INTERFACE),
        is_anon: ctx.flag(labels::ROLE_ANONYMOUS),
        is_auth: ctx.flag(labels::ROLE_AUTHENTICATED),
    }
}

/// Glob pattern handed to SCAN for a CID lookup.
pub fn build_search_pattern(prefix: &str, bin: Option<&str>, cid: &str) -> String {
    match bin {
        Some(bin) => format!("{}:{}:{}*", prefix, bin, cid),
        None => format!("{}:*:{}*", prefix, cid),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CidAndBin<'a> {
    pub bin: &'a str,
    pub cid: &'a str,
}

/// Splits `{prefix}:{bin}:{cid}...` into its bin and CID. The CID is the third
/// colon segment cut at the first `[`. Returns `None` for keys outside the
/// prefix or with fewer than three segments.
pub fn extract_cid_and_bin<'a>(key: &'a str, prefix: &str) -> Option<CidAndBin<'a>> {
    let rest = key.strip_prefix(prefix)?.strip_prefix(':')?;
    let mut parts = rest.split(':');
    let bin = parts.next()?;
    let third = parts.next()?;
    let cid = match third.find('[') {
        Some(idx) => &third[..idx],
        None => third,
    };
    Some(CidAndBin { bin, cid })
}
