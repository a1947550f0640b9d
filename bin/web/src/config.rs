//! Server configuration.
//!
//! Loaded via the `config` crate from environment variables. Leptos site
//! settings (`LEPTOS_SITE_ADDR` and friends) are read separately by
//! `leptos::prelude::get_configuration`.

use serde::Deserialize;

/// Web server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Directory holding the compiled JS, WASM and CSS bundle.
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,
}

fn default_log_filter() -> String {
    "info,tower_http=debug".to_string()
}

fn default_pkg_dir() -> String {
    "target/site/pkg".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            pkg_dir: default_pkg_dir(),
        }
    }
}

impl WebConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::default())
    }

    fn from_source(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment.separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> WebConfig {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        WebConfig::from_source(config::Environment::default().source(Some(source)))
            .expect("config should load")
    }

    #[test]
    fn web_config_has_correct_defaults() {
        let config = WebConfig::default();
        assert_eq!(config.log_filter, "info,tower_http=debug");
        assert_eq!(config.pkg_dir, "target/site/pkg");
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = load(&[]);
        assert_eq!(config.log_filter, "info,tower_http=debug");
        assert_eq!(config.pkg_dir, "target/site/pkg");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = load(&[("LOG_FILTER", "debug"), ("PKG_DIR", "/srv/pkg")]);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.pkg_dir, "/srv/pkg");
    }
}
