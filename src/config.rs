//! Layered server settings.
//!
//! Values are resolved from, in increasing priority: built-in defaults, an
//! optional `tasklist.toml` (or any other format `config` recognises under
//! that base name) in the working directory, and `TASKLIST_` environment
//! variables using `__` between nested keys, such as `TASKLIST_SERVER__PORT`.

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// HTTP server settings.
    pub server: ServerSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Host name or IP address to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl ServerSettings {
    /// Returns the `host:port` string to bind.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Settings {
    /// Loads settings from defaults, `tasklist.*` and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be read or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = base_builder()?
            .add_source(File::with_name("tasklist").required(false))
            .add_source(
                Environment::with_prefix("TASKLIST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        from_builder(builder)
    }
}

fn base_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", DEFAULT_HOST)?
        .set_default("server.port", i64::from(DEFAULT_PORT))
}

fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    let settings = builder.build()?.try_deserialize::<Settings>()?;
    tracing::debug!(address = %settings.server.address(), "settings loaded");
    Ok(settings)
}
