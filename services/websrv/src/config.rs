//! Service configuration
//!
//! Layered loading: built-in defaults, then `websrv.toml`, then `WEBSRV_*`
//! environment variables. The field constraint table rides along so it is
//! fixed at startup and injected into the validator.

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use pepmix_calc::Constraints;

use crate::error::{Result, WebSrvError};

/// Full service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Constraint table handed to the validator at startup.
    #[serde(default)]
    pub constraints: Constraints,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8090
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
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

impl Config {
    /// Load configuration from the default file location and environment.
    pub fn load() -> Result<Self> {
        Self::load_from("websrv.toml")
    }

    /// Load configuration with an explicit file path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("WEBSRV_").split("_"))
            .extract()
            .map_err(|e| WebSrvError::config(format!("Failed to load configuration: {e}")))
    }

    /// Check that the loaded values are coherent before the service starts.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(WebSrvError::config("Server port must not be 0"));
        }

        let c = &self.constraints;
        if c.water.min <= 0.0 || c.water.min >= c.water.max {
            return Err(WebSrvError::config(
                "Water volume limits must satisfy 0 < min < max",
            ));
        }
        if c.dose.caution <= 0.0 || c.dose.caution >= c.dose.warning {
            return Err(WebSrvError::config(
                "Dose caution threshold must be positive and below the warning threshold",
            ));
        }
        if c.vial.min <= 0.0
            || c.vial.common.min >= c.vial.common.max
            || c.vial.common.max >= c.vial.max
        {
            return Err(WebSrvError::config(
                "Vial limits must satisfy 0 < min and common range inside 0..max",
            ));
        }

        Ok(())
    }

    /// Listener address in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8090);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.constraints.water.max, 10.0);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("websrv.toml");
        fs::write(
            &path,
            r#"
[server]
port = 9000

[constraints.water]
max = 12.0
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.constraints.water.max, 12.0);
        assert_eq!(config.constraints.water.min, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_from("does-not-exist.toml").unwrap();
        assert_eq!(config.server.port, 8090);
    }

    #[test]
    fn test_validate_rejects_inverted_limits() {
        let mut config = Config::default();
        config.constraints.water.min = 20.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.constraints.dose.caution = 2000.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.constraints.vial.common.max = 50.0;
        assert!(config.validate().is_err());
    }
}
