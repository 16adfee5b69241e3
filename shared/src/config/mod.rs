//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Password hashing and verification code policy
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outbound SMTP relay configuration
//! - `server` - HTTP server, CORS and static file storage
//!
//! The whole tree is built once at process start by [`AppConfig::load`] and then
//! handed to each service constructor.

pub mod auth;
pub mod database;
pub mod environment;
pub mod mail;
pub mod server;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, VerificationConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::MailConfig;
pub use server::{CorsConfig, ServerConfig, StorageConfig};

/// Prefix for environment variable overrides, e.g. `APP__DATABASE__URL`
pub const ENV_PREFIX: &str = "APP";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Password and verification code configuration
    pub auth: AuthConfig,

    /// Outbound mail configuration
    pub mail: MailConfig,

    /// Uploaded image storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Baseline configuration for an environment, before file and env overrides
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Production => Self {
                environment,
                server: ServerConfig::new("0.0.0.0", 8000),
                database: DatabaseConfig::default().with_max_connections(50),
                auth: AuthConfig::default(),
                mail: MailConfig::default(),
                storage: StorageConfig::default(),
                cors: CorsConfig::default(),
                logging: LoggingConfig::for_environment(environment),
            },
            _ => Self {
                environment,
                server: ServerConfig::default(),
                database: DatabaseConfig::default(),
                auth: AuthConfig::default(),
                mail: MailConfig::development(),
                storage: StorageConfig::default(),
                cors: CorsConfig::development(),
                logging: LoggingConfig::for_environment(environment),
            },
        }
    }

    /// Load configuration from defaults, optional files and the environment
    ///
    /// Sources, lowest precedence first:
    /// 1. Built-in defaults for the detected environment
    /// 2. `config/default.toml` (optional)
    /// 3. `config/<environment>.toml` (optional)
    /// 4. `APP__SECTION__KEY` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let defaults = Self::for_environment(environment);

        let settings = Config::builder()
            .add_source(Config::try_from(&defaults)?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the services cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Message("database.url must not be empty".to_string()));
        }
        if self.auth.verification.code_ttl_seconds <= 0 {
            return Err(ConfigError::Message(
                "auth.verification.code_ttl_seconds must be positive".to_string(),
            ));
        }
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::Message(
                "auth.bcrypt_cost must be between 4 and 31".to_string(),
            ));
        }
        if self.environment.is_production() && !self.mail.is_smtp() {
            return Err(ConfigError::Message(
                "mail.provider must be smtp in production".to_string(),
            ));
        }
        if self.mail.timeout_secs == 0 {
            return Err(ConfigError::Message("mail.timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}
