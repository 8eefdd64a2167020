//! Frontend configuration
//!
//! Defaults are embedded as TOML. A deployment can override any subset of
//! them by defining `window.PARKWIZ_CONFIG` before the wasm bundle starts:
//!
//! ```js
//! window.PARKWIZ_CONFIG = { api: { base_url: "https://api.parkwiz.example" } };
//! ```

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct FrontendConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub orders: OrdersConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty string means same origin
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_login_route")]
    pub login_route: String,
    #[serde(default = "default_home_route")]
    pub home_route: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrdersConfig {
    #[serde(default = "default_rows_per_page")]
    pub default_rows_per_page: usize,
    #[serde(default)]
    pub bulk_selection_policy: BulkSelectionPolicy,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// What happens to the selection set after a bulk action finishes
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BulkSelectionPolicy {
    /// Failed ids stay selected so the user can retry them
    #[default]
    KeepFailed,
    /// Legacy behavior: everything is deselected even after partial failure
    ClearAll,
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_login_route() -> String {
    "/user/login".to_string()
}

fn default_home_route() -> String {
    "/".to_string()
}

fn default_rows_per_page() -> usize {
    5
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            login_route: default_login_route(),
            home_route: default_home_route(),
        }
    }
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            default_rows_per_page: default_rows_per_page(),
            bulk_selection_policy: BulkSelectionPolicy::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[session]
cookie_name = "token"
login_route = "/user/login"
home_route = "/"

[orders]
default_rows_per_page = 5
bulk_selection_policy = "keep_failed"

[logging]
level = "debug"
"#;

/// Name of the JS global holding runtime overrides
const OVERRIDE_GLOBAL: &str = "PARKWIZ_CONFIG";

static CONFIG: Lazy<FrontendConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Failed to load config, using defaults: {}", e);
        FrontendConfig::default()
    }
});

/// Process-wide configuration, loaded on first access
pub fn config() -> &'static FrontendConfig {
    &CONFIG
}

/// Load configuration
///
/// Search order:
/// 1. `window.PARKWIZ_CONFIG` (only in the browser)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<FrontendConfig> {
    if let Some(config) = read_override()? {
        log::info!("Using configuration from window.{}", OVERRIDE_GLOBAL);
        return Ok(config);
    }
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<FrontendConfig> {
    let config: FrontendConfig = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(target_arch = "wasm32")]
fn read_override() -> anyhow::Result<Option<FrontendConfig>> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(OVERRIDE_GLOBAL))
        .map_err(|e| anyhow::anyhow!("Failed to read window.{}: {:?}", OVERRIDE_GLOBAL, e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let config = serde_wasm_bindgen::from_value::<FrontendConfig>(value)
        .map_err(|e| anyhow::anyhow!("Invalid window.{}: {}", OVERRIDE_GLOBAL, e))?;
    Ok(Some(config))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_override() -> anyhow::Result<Option<FrontendConfig>> {
    Ok(None)
}

/// Parse the configured log level, `Debug` when unrecognised
pub fn log_level(config: &FrontendConfig) -> log::Level {
    config.logging.level.parse().unwrap_or(log::Level::Debug)
}

/// Logger level before the configuration is read, so messages from loading it are kept
pub const STARTUP_LOG_LEVEL: log::Level = log::Level::Trace;

/// Filter applied once the configuration is known
pub fn max_level_filter(config: &FrontendConfig) -> log::LevelFilter {
    log_level(config).to_level_filter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, FrontendConfig {
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            orders: OrdersConfig::default(),
            logging: LoggingConfig::default(),
        });
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://api.parkwiz.example"

            [orders]
            bulk_selection_policy = "clear_all"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.parkwiz.example");
        assert_eq!(config.session.login_route, "/user/login");
        assert_eq!(config.orders.default_rows_per_page, 5);
        assert_eq!(config.orders.bulk_selection_policy, BulkSelectionPolicy::ClearAll);
    }

    #[test]
    fn test_log_level_fallback() {
        let mut config = FrontendConfig::default();
        assert_eq!(log_level(&config), log::Level::Debug);
        config.logging.level = "warn".to_string();
        assert_eq!(log_level(&config), log::Level::Warn);
        config.logging.level = "loud".to_string();
        assert_eq!(log_level(&config), log::Level::Debug);
    }

    #[test]
    fn test_startup_level_is_never_stricter_than_configured() {
        let mut config = FrontendConfig::default();
        for level in ["error", "warn", "info", "debug", "trace", "bogus"] {
            config.logging.level = level.to_string();
            assert!(max_level_filter(&config) <= STARTUP_LOG_LEVEL.to_level_filter());
        }
        config.logging.level = "info".to_string();
        assert_eq!(max_level_filter(&config), log::LevelFilter::Info);
    }

    #[test]
    fn test_load_config_without_browser_uses_defaults() {
        let config = load_config().unwrap();
        assert_eq!(config.session.cookie_name, "token");
    }
}
