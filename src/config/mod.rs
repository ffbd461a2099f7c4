use crate::core::{AppError, Result};
use std::env;

pub mod database;
pub mod processors;
pub mod server;

pub use database::DatabaseConfig;
pub use processors::{
    AvangateConfig, BraintreeConfig, DalPayConfig, PayPalConfig, ProcessorsConfig, RecurlyConfig,
};
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub database: Option<DatabaseConfig>,
    pub processors: ProcessorsConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Filter directives used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> String {
        format!("payee={},actix_web=info", self.log_level)
    }
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") | Err(_) => LogFormat::Pretty,
            Ok(other) => {
                return Err(AppError::Configuration(format!(
                    "Invalid LOG_FORMAT: {}",
                    other
                )))
            }
        };

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".to_string()),
                log_format,
            },
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            processors: ProcessorsConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if !matches!(
            self.app.log_level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(AppError::Configuration(format!(
                "Invalid LOG_LEVEL: {}",
                self.app.log_level
            )));
        }

        if self.processors.is_empty() {
            return Err(AppError::Configuration(
                "At least one payment processor must be configured".to_string(),
            ));
        }

        Ok(())
    }
}
