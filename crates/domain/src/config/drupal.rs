use serde::{Deserialize, Serialize};

/// Settings for the Drupal cache-key report and CID search.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DrupalConfig {
    /// Namespace prefix shared by every cache key the site writes
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Maximum number of keys visited by one aggregation pass
    #[serde(default = "default_scan_cap")]
    pub scan_cap: usize,

    /// COUNT hint sent with each SCAN during aggregation
    #[serde(default = "default_scan_count")]
    pub scan_count: usize,

    /// Number of routes kept in the route ranking
    #[serde(default = "default_top_routes_limit")]
    pub top_routes_limit: usize,

    /// Maximum number of candidate keys collected by a CID search
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Maximum number of SCAN round trips for a CID search
    #[serde(default = "default_search_max_round_trips")]
    pub search_max_round_trips: usize,

    /// COUNT hint sent with each SCAN during a CID search
    #[serde(default = "default_search_count")]
    pub search_count: usize,
}

impl Default for DrupalConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            scan_cap: default_scan_cap(),
            scan_count: default_scan_count(),
            top_routes_limit: default_top_routes_limit(),
            search_limit: default_search_limit(),
            search_max_round_trips: default_search_max_round_trips(),
            search_count: default_search_count(),
        }
    }
}

fn default_prefix() -> String {
    "drupal.redis".to_string()
}

fn default_scan_cap() -> usize {
    5000
}

fn default_scan_count() -> usize {
    500
}

fn default_top_routes_limit() -> usize {
    20
}

fn default_search_limit() -> usize {
    200
}

fn default_search_max_round_trips() -> usize {
    20
}

fn default_search_count() -> usize {
    1000
}
