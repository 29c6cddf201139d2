use keyscope_domain::{
    AuthVsAnon, BinSummary, CacheReport, CidSearchReport, RouteSummary, SearchHit, Ttl,
    VolumeSummary,
};
use serde::{Deserialize, Serialize};

pub const ALL_BINS: &str = "all";

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BinSummaryDto {
    pub bin: String,
    pub count: u64,
    pub total_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ttl: Option<i64>,
    pub max_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_key: Option<String>,
}

impl From<BinSummary> for BinSummaryDto {
    fn from(b: BinSummary) -> Self {
        Self {
            bin: b.bin,
            count: b.count,
            total_bytes: b.total_bytes,
            avg_ttl: b.avg_ttl,
            max_bytes: b.max_bytes,
            max_key: b.max_key,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummaryDto {
    pub route: String,
    pub bytes: u64,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl From<RouteSummary> for RouteSummaryDto {
    fn from(r: RouteSummary) -> Self {
        Self {
            route: r.route,
            bytes: r.bytes,
            count: r.count,
            url: r.url,
            theme: r.theme,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ThemeDto {
    pub theme: String,
    pub bytes: u64,
    pub count: u64,
}

impl From<VolumeSummary> for ThemeDto {
    fn from(v: VolumeSummary) -> Self {
        Self {
            theme: v.name,
            bytes: v.bytes,
            count: v.count,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct LanguageDto {
    pub language: String,
    pub bytes: u64,
    pub count: u64,
}

impl From<VolumeSummary> for LanguageDto {
    fn from(v: VolumeSummary) -> Self {
        Self {
            language: v.name,
            bytes: v.bytes,
            count: v.count,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct AuthVsAnonDto {
    pub auth: u64,
    pub anon: u64,
}

impl From<AuthVsAnon> for AuthVsAnonDto {
    fn from(a: AuthVsAnon) -> Self {
        Self {
            auth: a.auth,
            anon: a.anon,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CacheReportResponse {
    pub ok: bool,
    pub scanned: usize,
    pub prefix: String,
    pub bins: Vec<BinSummaryDto>,
    pub top_routes: Vec<RouteSummaryDto>,
    pub themes: Vec<ThemeDto>,
    pub languages: Vec<LanguageDto>,
    pub auth_vs_anon: AuthVsAnonDto,
    pub note: String,
}

impl CacheReportResponse {
    pub fn from_report(report: CacheReport) -> Self {
        Self {
            ok: true,
            scanned: report.scanned,
            prefix: report.prefix,
            bins: report.bins.into_iter().map(Into::into).collect(),
            top_routes: report.top_routes.into_iter().map(Into::into).collect(),
            themes: report.themes.into_iter().map(Into::into).collect(),
            languages: report.languages.into_iter().map(Into::into).collect(),
            auth_vs_anon: report.auth_vs_anon.into(),
            note: report.note,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct CidSearchQuery {
    #[serde(default)]
    pub cid: Option<String>,
    #[serde(default)]
    pub bin: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Serialize, Debug, Clone)]
pub struct SearchHitDto {
    pub key: String,
    pub bin: String,
    pub cid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<Ttl>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl From<SearchHit> for SearchHitDto {
    fn from(h: SearchHit) -> Self {
        Self {
            key: h.key,
            bin: h.bin,
            cid: h.cid,
            ttl: h.ttl,
            key_type: h.key_type,
            size: h.size,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CidSearchResponse {
    pub ok: bool,
    pub cid: String,
    pub bin: String,
    pub count: usize,
    pub keys: Vec<SearchHitDto>,
    pub pattern: String,
}

impl CidSearchResponse {
    pub fn from_report(report: CidSearchReport) -> Self {
        let keys: Vec<SearchHitDto> = report.hits.into_iter().map(Into::into).collect();
        Self {
            ok: true,
            cid: report.cid,
            bin: report.bin.unwrap_or_else(|| ALL_BINS.to_string()),
            count: keys.len(),
            keys,
            pattern: report.pattern,
        }
    }
}
