//! Environment-driven settings for `hf2catalog`.

use catalog_hub::HubConfig;

#[derive(Debug, Clone)]
pub struct Config {
    /// Hub endpoint, token and proxy (`HF_ENDPOINT`, `HF_TOKEN`, `HTTPS_PROXY`).
    pub hub: HubConfig,

    /// `tracing` filter string (default: `"warn"`). Logs go to stderr so
    /// stdout only ever carries the document.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            hub: HubConfig::from_env(),
            log_level: env_or("CATALOG_LOG", "warn"),
            log_json: parse_flag("CATALOG_LOG_JSON"),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
