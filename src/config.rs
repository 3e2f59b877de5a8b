use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::ConfigError;

/// Server configuration, read once at startup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Serve Swagger UI and the OpenAPI document
    #[serde(default = "default_swagger_enabled")]
    pub swagger_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        // Entries that are not valid UTF-8 are skipped rather than aborting the load
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));

        match Self::from_vars(vars) {
            Ok(config) => {
                info!("Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                Err(e)
            }
        }
    }

    /// Build configuration from explicit key/value pairs instead of the process environment
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default tracing filter derived from `log_level`
    pub fn log_filter(&self) -> String {
        format!(
            "eloquent_responder={level},tower_http={level},axum::rejection=trace,info",
            level = self.log_level
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            swagger_enabled: default_swagger_enabled(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_swagger_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_bind_all_interfaces_on_8080() {
        let config = Config::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.server_address(), "0.0.0.0:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.swagger_enabled);
        assert_eq!(config.server_address(), Config::default().server_address());
    }

    #[test]
    fn reads_host_port_and_flags() {
        let config = Config::from_vars(vars(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("LOG_LEVEL", "debug"),
            ("SWAGGER_ENABLED", "false"),
        ]))
        .unwrap();

        assert_eq!(config.server_address(), "127.0.0.1:9000");
        assert!(!config.swagger_enabled);
        assert!(config
            .log_filter()
            .starts_with("eloquent_responder=debug,tower_http=debug"));
    }

    #[cfg(unix)]
    #[test]
    fn load_skips_non_utf8_entries() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("CONFIG_TEST_JUNK", OsStr::from_bytes(&[0xff, 0xfe]));
        let loaded = Config::load();
        std::env::remove_var("CONFIG_TEST_JUNK");

        assert!(loaded.is_ok());
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_vars(vars(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().starts_with("Environment variable error"));
    }
}
