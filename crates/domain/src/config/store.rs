use serde::{Deserialize, Serialize};

/// Connection settings for the key-value store being monitored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Connection URL, e.g. `redis://127.0.0.1:6379/0`
    #[serde(default = "default_url")]
    pub url: String,

    /// Upper bound on elements returned when inspecting a collection key
    #[serde(default = "default_inspect_max_elements")]
    pub inspect_max_elements: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            inspect_max_elements: default_inspect_max_elements(),
        }
    }
}

fn default_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

fn default_inspect_max_elements() -> usize {
    1000
}
