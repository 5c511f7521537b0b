use serde::Deserialize;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Application settings loaded from `config.toml` at process start.
///
/// Validation is limited to required-field checks; a failure here is fatal.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub port: u16,
    pub environment: String,
    #[serde(default)]
    pub cors_allow_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub schema: String,
    pub charset: String,
    pub collation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "plain".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` in the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        let raw = config::Config::builder()
            .add_source(config::File::with_name("config").format(config::FileFormat::Toml))
            .build()?;

        Self::from_config(raw)
    }

    fn from_config(raw: config::Config) -> Result<Self, ConfigError> {
        let settings: Settings = raw.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        fn required(field: &str, value: &str) -> Result<(), ConfigError> {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{field} is required")));
            }
            Ok(())
        }

        required("app.name", &self.app.name)?;
        required("app.environment", &self.app.environment)?;
        if self.app.port == 0 {
            return Err(ConfigError::Validation("app.port is required".to_string()));
        }

        required("database.host", &self.database.host)?;
        required("database.user", &self.database.user)?;
        required("database.pass", &self.database.pass)?;
        required("database.schema", &self.database.schema)?;
        required("database.charset", &self.database.charset)?;
        required("database.collation", &self.database.collation)?;
        if self.database.port == 0 {
            return Err(ConfigError::Validation(
                "database.port is required".to_string(),
            ));
        }

        Ok(())
    }
}
