use serde::{Deserialize, Serialize};

pub const LOG_FORMAT_TEXT: &str = "text";
pub const LOG_FORMAT_JSON: &str = "json";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `text` for human-readable lines, `json` for one object per event
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case(LOG_FORMAT_JSON)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    LOG_FORMAT_TEXT.to_string()
}
