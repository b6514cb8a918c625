//! Service configuration
//!
//! Layers, lowest precedence first: built-in defaults, an optional `api`
//! config file (`api.toml`, `api.yaml`, ...), `APP__*` environment variables,
//! and finally `PORT`.

use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::BTreeMap;

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// API service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub server: ServerConfig,
    /// Extra or replacement emergency numbers, keyed by service
    #[serde(default)]
    pub emergency: BTreeMap<String, String>,
}

impl ApiConfig {
    /// Load the configuration from defaults, file and environment
    ///
    /// # Environment Variables
    /// - `APP__SERVER__HOST`: listen address (default: 0.0.0.0)
    /// - `APP__SERVER__PORT` or `PORT`: listen port (default: 5000)
    /// - `APP__EMERGENCY__<SERVICE>`: emergency number for `<service>`
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .add_source(File::with_name("api").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?
            .try_deserialize()
    }
}
