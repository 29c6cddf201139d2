//! Single-pass fold of decoded cache keys into the report views shown on the
//! Drupal panel: per-bin summary, route ranking, theme and language
//! breakdowns, and authenticated vs anonymous page-cache entries.

use crate::cache_key::{CacheKeyRow, DYNAMIC_PAGE_CACHE_BIN};
use std::collections::BTreeMap;

pub const MISSING_LANGUAGE: &str = "n/a";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinSummary {
    pub bin: String,
    pub count: u64,
    pub total_bytes: u64,
    /// Running pairwise average, `round((prev + ttl) / 2)`, not a true mean.
    pub avg_ttl: Option<i64>,
    pub max_bytes: u64,
    pub max_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub route: String,
    pub bytes: u64,
    pub count: u64,
    /// Captured from the first key seen for the route, never updated.
    pub url: Option<String>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeSummary {
    pub name: String,
    pub bytes: u64,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthVsAnon {
    pub auth: u64,
    pub anon: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheReport {
    pub prefix: String,
    pub scanned: usize,
    pub bins: Vec<BinSummary>,
    pub top_routes: Vec<RouteSummary>,
    pub themes: Vec<VolumeSummary>,
    pub languages: Vec<VolumeSummary>,
    pub auth_vs_anon: AuthVsAnon,
    pub note: String,
}

#[derive(Debug, Default)]
struct BinStat {
    count: u64,
    total_bytes: u64,
    avg_ttl: Option<i64>,
    max_bytes: u64,
    max_key: Option<String>,
}

#[derive(Debug, Default)]
struct RouteStat {
    bytes: u64,
    count: u64,
    url: Option<String>,
    theme: Option<String>,
}

#[derive(Debug, Default)]
struct VolumeStat {
    bytes: u64,
    count: u64,
}

impl VolumeStat {
    fn add(&mut self, bytes: u64) {
        self.bytes += bytes;
        self.count += 1;
    }
}

/// Accumulates rows one at a time; `finish` sorts and truncates.
#[derive(Debug, Default)]
pub struct CacheReportBuilder {
    scanned: usize,
    bins: BTreeMap<String, BinStat>,
    routes: BTreeMap<String, RouteStat>,
    themes: BTreeMap<String, VolumeStat>,
    languages: BTreeMap<String, VolumeStat>,
    auth_vs_anon: AuthVsAnon,
}

impl CacheReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scanned(&self) -> usize {
        self.scanned
    }

    pub fn fold(&mut self, row: &CacheKeyRow<'_>) {
        self.scanned += 1;
        let bytes = row.bytes.unwrap_or(0);

        let bin = self.bins.entry(row.bin.to_string()).or_default();
        bin.count += 1;
        bin.total_bytes += bytes;
        if let Some(ttl) = row.ttl.and_then(|t| t.remaining_secs()) {
            bin.avg_ttl = Some(match bin.avg_ttl {
                // both operands are non-negative, so this is round-half-up
                Some(prev) => (prev + ttl + 1) / 2,
                None => ttl,
            });
        }
        if bytes > bin.max_bytes {
            bin.max_bytes = bytes;
            bin.max_key = Some(row.key.to_string());
        }

        let page_cache = row.bin == DYNAMIC_PAGE_CACHE_BIN;

        if page_cache {
            if let Some(route) = row.route {
                let stat = self
                    .routes
                    .entry(route.to_string())
                    .or_insert_with(|| RouteStat {
                        url: row.url.map(str::to_string),
                        theme: row.theme.map(str::to_string),
                        ..RouteStat::default()
                    });
                stat.bytes += bytes;
                stat.count += 1;
            }

            if row.is_auth {
                self.auth_vs_anon.auth += 1;
            }
            if row.is_anon {
                self.auth_vs_anon.anon += 1;
            }
        }

        if let Some(theme) = row.theme {
            self.themes.entry(theme.to_string()).or_default().add(bytes);
        }

        let language = row.lang_content.unwrap_or(MISSING_LANGUAGE);
        self.languages
            .entry(language.to_string())
            .or_default()
            .add(bytes);
    }

    pub fn finish(self, prefix: &str, top_limit: usize, scan_cap: usize) -> CacheReport {
        let mut bins: Vec<BinSummary> = self
            .bins
            .into_iter()
            .map(|(bin, s)| BinSummary {
                bin,
                count: s.count,
                total_bytes: s.total_bytes,
                avg_ttl: s.avg_ttl,
                max_bytes: s.max_bytes,
                max_key: s.max_key,
            })
            .collect();
        bins.sort_by(|a, b| b.total_bytes.cmp(&a.total_bytes));

        let mut top_routes: Vec<RouteSummary> = self
            .routes
            .into_iter()
            .map(|(route, s)| RouteSummary {
                route,
                bytes: s.bytes,
                count: s.count,
                url: s.url,
                theme: s.theme,
            })
            .collect();
        top_routes.sort_by(|a, b| b.bytes.cmp(&a.bytes));
        top_routes.truncate(top_limit);

        CacheReport {
            prefix: prefix.to_string(),
            scanned: self.scanned,
            bins,
            top_routes,
            themes: into_ranked(self.themes),
            languages: into_ranked(self.languages),
            auth_vs_anon: self.auth_vs_anon,
            note: report_note(self.scanned, scan_cap),
        }
    }
}

fn into_ranked(map: BTreeMap<String, VolumeStat>) -> Vec<VolumeSummary> {
    let mut out: Vec<VolumeSummary> = map
        .into_iter()
        .map(|(name, s)| VolumeSummary {
            name,
            bytes: s.bytes,
            count: s.count,
        })
        .collect();
    out.sort_by(|a, b| b.bytes.cmp(&a.bytes));
    out
}

fn report_note(scanned: usize, scan_cap: usize) -> String {
    let mut note = String::from(
        "Sizes come from MEMORY USAGE; keys whose size could not be read count as 0 bytes.",
    );
    if scanned >= scan_cap {
        note.push_str(&format!(
            " Scan stopped at the cap of {} keys, so totals cover only part of the namespace.",
            scan_cap
        ));
    }
    note
}
