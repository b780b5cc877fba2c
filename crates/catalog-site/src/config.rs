//! Site configuration, loaded from environment variables at startup.

use std::path::PathBuf;

/// Runtime configuration for building and serving the catalog site.
///
/// Every field has a default so `catalog-server` works from a checkout
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// TCP address to bind (default: `"0.0.0.0:8000"`).
    pub bind_address: String,

    /// Directory holding the `ModelCatalog` YAML sources (default: `"./catalog"`).
    pub catalog_dir: PathBuf,

    /// Directory the data files are written to and served from (default: `"./dist"`).
    pub out_dir: PathBuf,

    /// Comma-separated CORS origins. `None` allows any origin.
    pub cors_allowed_origins: Option<String>,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_owned(),
            catalog_dir: PathBuf::from("./catalog"),
            out_dir: PathBuf::from("./dist"),
            cors_allowed_origins: None,
            log_level: "info".to_owned(),
            log_json: false,
        }
    }
}

impl SiteConfig {
    /// Build [`SiteConfig`] from `CATALOG_*` environment variables, falling
    /// back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_address: env_or("CATALOG_BIND", &defaults.bind_address),
            catalog_dir: std::env::var_os("CATALOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_dir),
            out_dir: std::env::var_os("CATALOG_DIST")
                .map(PathBuf::from)
                .unwrap_or(defaults.out_dir),
            cors_allowed_origins: std::env::var("CATALOG_CORS_ORIGINS")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            log_level: env_or("CATALOG_LOG", &defaults.log_level),
            log_json: std::env::var("CATALOG_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
