//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_ACCESS_TOKEN_EXPIRY, DEFAULT_REFRESH_TOKEN_EXPIRY, MIN_PRODUCTION_SECRET_LENGTH,
    PLACEHOLDER_JWT_SECRET,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    /// Daily-rolling log files are written here when set.
    pub directory: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::builder(&env)?.build()?.try_deserialize()
    }

    fn builder(env: &str) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "devhire-server")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("jwt.access_token_expiry", DEFAULT_ACCESS_TOKEN_EXPIRY)?
            .set_default("jwt.refresh_token_expiry", DEFAULT_REFRESH_TOKEN_EXPIRY)?
            .set_default("log.level", "info")?
            .set_default("log.json", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true)))
    }

    pub fn is_production(&self) -> bool {
        self.app.env.eq_ignore_ascii_case("production")
    }

    /// Production refuses the placeholder or a short JWT secret.
    pub fn ensure_secure(&self) -> Result<(), AppError> {
        if !self.is_production() {
            return Ok(());
        }
        if self.jwt.secret == PLACEHOLDER_JWT_SECRET || self.jwt.secret.len() < MIN_PRODUCTION_SECRET_LENGTH {
            return Err(AppError::InsecureConfig(format!(
                "jwt.secret must be set to at least {} characters in production",
                MIN_PRODUCTION_SECRET_LENGTH
            )));
        }
        Ok(())
    }
}
