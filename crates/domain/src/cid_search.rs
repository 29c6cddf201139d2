use crate::cache_key::{extract_cid_and_bin, CidAndBin};
use crate::ttl::Ttl;

/// Exact-match filter applied after the store's glob match, which cannot
/// express "CID ends at `[` or end of segment".
#[derive(Debug, Clone, Copy)]
pub struct CidFilter<'a> {
    pub prefix: &'a str,
    pub cid: &'a str,
    pub bin: Option<&'a str>,
}

impl<'a> CidFilter<'a> {
    pub fn new(prefix: &'a str, cid: &'a str, bin: Option<&'a str>) -> Self {
        Self { prefix, cid, bin }
    }

    pub fn accept<'k>(&self, key: &'k str) -> Option<CidAndBin<'k>> {
        let parts = extract_cid_and_bin(key, self.prefix)?;
        if parts.cid != self.cid {
            return None;
        }
        match self.bin {
            Some(bin) if parts.bin != bin => None,
            _ => Some(parts),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub key: String,
    pub bin: String,
    pub cid: String,
    pub ttl: Option<Ttl>,
    pub key_type: Option<String>,
    pub size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidSearchReport {
    pub cid: String,
    pub bin: Option<String>,
    pub pattern: String,
    pub hits: Vec<SearchHit>,
}
